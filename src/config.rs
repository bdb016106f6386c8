use crate::error::{FacetError, FacetResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Rows visible before "show more" is used.
    #[arg(long, default_value_t = 10)]
    pub page_size: usize,

    /// Prefix for generated search links.
    #[arg(long, default_value = "/")]
    pub base_url: String,

    /// Schema model JSON. Built-in defaults are used when empty.
    #[arg(long, default_value = "")]
    pub model: String,

    /// Message catalog JSON (message id -> text).
    #[arg(long, default_value = "")]
    pub messages: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            base_url: "/".to_string(),
            model: String::new(),
            messages: String::new(),
        }
    }
}

impl ViewConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FacetResult<Self> {
        let content = fs::read_to_string(&path).map_err(|e| {
            FacetError::Config(format!(
                "Failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> FacetResult<()> {
        if self.page_size == 0 {
            return Err(FacetError::Config("page_size must be at least 1".into()));
        }
        Ok(())
    }

    /// Overwrites fields that were given explicitly on the command line.
    pub fn merge_from_cli(&mut self, cli: &ViewConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(page_size, "page_size");
        update_if_present!(base_url, "base_url");
        update_if_present!(model, "model");
        update_if_present!(messages, "messages");
    }

    pub fn model_path(&self) -> Option<&str> {
        non_empty(&self.model)
    }

    pub fn messages_path(&self) -> Option<&str> {
        non_empty(&self.messages)
    }
}

fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

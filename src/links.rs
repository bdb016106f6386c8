use crate::field::StatisticField;

/// Builds the search link a statistic row points at.
pub trait LinkBuilder {
    fn stat_link(&self, collection: &str, field: &StatisticField, value: &str) -> String;
}

/// Links into the search page, filtered by collection and facet value.
#[derive(Debug, Clone)]
pub struct SearchLinkBuilder {
    base_url: String,
}

impl SearchLinkBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}

impl Default for SearchLinkBuilder {
    fn default() -> Self {
        Self::new("")
    }
}

impl LinkBuilder for SearchLinkBuilder {
    fn stat_link(&self, collection: &str, field: &StatisticField, value: &str) -> String {
        format!(
            "{}/search?{}={}&{}={}",
            self.base_url,
            urlencoding::encode("filter:collection_id"),
            urlencoding::encode(collection),
            urlencoding::encode(&format!("filter:{}", field.name())),
            urlencoding::encode(value),
        )
    }
}

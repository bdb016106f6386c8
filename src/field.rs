use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Fields with dedicated presentation rules.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, IntoStaticStr, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownField {
    Schema,
    Countries,
}

impl KnownField {
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// The dimension a statistic aggregates over.
///
/// Any field name without a dedicated rule is carried as `Generic`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StatisticField {
    Schema,
    Countries,
    Generic(String),
}

impl StatisticField {
    pub fn name(&self) -> &str {
        match self {
            Self::Schema => KnownField::Schema.name(),
            Self::Countries => KnownField::Countries.name(),
            Self::Generic(name) => name,
        }
    }

    pub fn known(&self) -> Option<KnownField> {
        match self {
            Self::Schema => Some(KnownField::Schema),
            Self::Countries => Some(KnownField::Countries),
            Self::Generic(_) => None,
        }
    }
}

impl From<KnownField> for StatisticField {
    fn from(field: KnownField) -> Self {
        match field {
            KnownField::Schema => Self::Schema,
            KnownField::Countries => Self::Countries,
        }
    }
}

impl From<&str> for StatisticField {
    fn from(s: &str) -> Self {
        let s = s.trim();
        match KnownField::from_str(s) {
            Ok(known) => known.into(),
            Err(_) => Self::Generic(s.to_string()),
        }
    }
}

impl From<String> for StatisticField {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<StatisticField> for String {
    fn from(field: StatisticField) -> Self {
        field.name().to_string()
    }
}

impl FromStr for StatisticField {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for StatisticField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

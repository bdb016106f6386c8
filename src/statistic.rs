use crate::error::{FacetError, FacetResult};
use crate::field::StatisticField;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticEntry {
    pub value: String,
    pub count: u64,
}

/// Facet value -> occurrence count, in the order the producer reported it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Statistic {
    values: IndexMap<String, u64>,
}

impl Statistic {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, value: impl Into<String>, count: u64) {
        self.values.insert(value.into(), count);
    }

    pub fn get(&self, value: &str) -> Option<u64> {
        self.values.get(value).copied()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains_key(value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of all counts, saturating at `u64::MAX`.
    pub fn sum(&self) -> u64 {
        self.values.values().copied().fold(0, u64::saturating_add)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.keys().map(String::as_str)
    }

    pub fn entries(&self) -> Vec<StatisticEntry> {
        self.iter()
            .map(|(value, count)| StatisticEntry {
                value: value.to_string(),
                count,
            })
            .collect()
    }

    /// Keeps the entries accepted by `keep`, in their original order.
    pub fn retain_by<F>(&self, mut keep: F) -> Statistic
    where
        F: FnMut(&str) -> bool,
    {
        let values = self
            .values
            .iter()
            .filter(|(k, _)| keep(k))
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        Statistic { values }
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for Statistic {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut stat = Statistic::new();
        for (k, v) in iter {
            stat.insert(k, v);
        }
        stat
    }
}

/// One facet as reported by the backend. `values` is absent while pending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetStatistic {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub values: Option<Statistic>,
}

/// All facets reported for a single collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionStatistics {
    pub collection_id: String,
    #[serde(flatten)]
    pub facets: IndexMap<StatisticField, FacetStatistic>,
}

impl CollectionStatistics {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FacetResult<Self> {
        let content = fs::read_to_string(&path)?;
        let stats: Self = serde_json::from_str(&content)?;
        if stats.collection_id.trim().is_empty() {
            return Err(FacetError::Validation(format!(
                "Statistics file '{}' has no collection_id",
                path.as_ref().display()
            )));
        }
        debug!(
            collection = %stats.collection_id,
            facets = stats.facets.len(),
            "loaded collection statistics"
        );
        Ok(stats)
    }

    pub fn facet(&self, field: &StatisticField) -> Option<&FacetStatistic> {
        self.facets.get(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_reported_order() {
        let stat: Statistic = serde_json::from_str(r#"{"b": 1, "a": 9, "c": 4}"#).unwrap();
        assert_eq!(stat.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(stat.sum(), 14);
    }

    #[test]
    fn pending_facet_has_no_values() {
        let stats: CollectionStatistics = serde_json::from_str(
            r#"{"collection_id": "7", "schema": {"total": 3}, "names": {"values": {"x": 1}}}"#,
        )
        .unwrap();
        let schema = stats.facet(&StatisticField::Schema).unwrap();
        assert_eq!(schema.total, Some(3));
        assert!(schema.values.is_none());
        let names = stats.facet(&StatisticField::from("names")).unwrap();
        assert_eq!(names.values.as_ref().map(Statistic::len), Some(1));
    }
}

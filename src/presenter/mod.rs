pub mod view;

use crate::field::StatisticField;
use crate::links::LinkBuilder;
use crate::locale::{plural, MessageCatalog};
use crate::model::TypeLookup;
use crate::statistic::{Statistic, StatisticEntry};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

pub use view::{LoadedView, StatRow, StatisticsView};

/// External capabilities the presenter reads from.
#[derive(Clone, Copy)]
pub struct Capabilities<'a> {
    pub types: &'a dyn TypeLookup,
    pub messages: &'a dyn MessageCatalog,
    pub links: &'a dyn LinkBuilder,
}

/// Everything a facet panel is rendered from.
#[derive(Debug, Clone, Copy)]
pub struct StatisticsProps<'a> {
    pub collection: &'a str,
    pub field: &'a StatisticField,
    pub total: Option<u64>,
    /// `None` while the statistic is still loading.
    pub values: Option<&'a Statistic>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Label {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon: None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalRule {
    /// Categories are distinct, so the total is the number of surviving keys.
    SurvivingKeys,
    /// The server-reported aggregate, which may exceed the visible sum.
    Reported,
}

/// Per-field presentation rules.
#[derive(Clone, Copy)]
pub struct FieldStrategy {
    pub filter_predicate: fn(&str, &dyn TypeLookup) -> bool,
    pub total_rule: TotalRule,
    pub label_renderer: fn(&str, &Capabilities<'_>) -> Label,
    /// Message id prefix and English defaults for the total line.
    pub total_message: (&'static str, &'static str, &'static str),
}

impl FieldStrategy {
    pub fn for_field(field: &StatisticField) -> Self {
        match field {
            StatisticField::Schema => Self {
                filter_predicate: keep_tangible,
                total_rule: TotalRule::SurvivingKeys,
                label_renderer: schema_label,
                total_message: (
                    "collection.statistics.schema",
                    "{count} entity type",
                    "{count} entity types",
                ),
            },
            StatisticField::Countries => Self {
                filter_predicate: keep_all,
                total_rule: TotalRule::Reported,
                label_renderer: country_label,
                total_message: (
                    "collection.statistics.countries",
                    "{count} country",
                    "{count} countries",
                ),
            },
            StatisticField::Generic(_) => Self {
                filter_predicate: keep_all,
                total_rule: TotalRule::Reported,
                label_renderer: raw_label,
                total_message: (
                    "collection.statistics.values",
                    "{count} value",
                    "{count} values",
                ),
            },
        }
    }
}

fn keep_all(_value: &str, _types: &dyn TypeLookup) -> bool {
    true
}

fn keep_tangible(value: &str, types: &dyn TypeLookup) -> bool {
    types.is_tangible(value)
}

fn raw_label(value: &str, _caps: &Capabilities<'_>) -> Label {
    Label::plain(value)
}

fn schema_label(value: &str, caps: &Capabilities<'_>) -> Label {
    match caps.types.resolve_type(value) {
        Some(schema) => Label {
            text: schema.plural().to_string(),
            icon: schema.icon().map(str::to_string),
        },
        None => Label::plain(value),
    }
}

fn country_label(value: &str, caps: &Capabilities<'_>) -> Label {
    let text = caps
        .messages
        .country_name(value)
        .unwrap_or_else(|| value.to_string());
    Label::plain(text)
}

/// Drops the values the field's predicate rejects; counts are kept as-is.
pub fn filter(field: &StatisticField, values: &Statistic, types: &dyn TypeLookup) -> Statistic {
    let strategy = FieldStrategy::for_field(field);
    let filtered = values.retain_by(|value| (strategy.filter_predicate)(value, types));
    if filtered.len() != values.len() {
        debug!(
            field = %field,
            before = values.len(),
            after = filtered.len(),
            "filtered statistic values"
        );
    }
    filtered
}

/// The total shown above the rows. Without a reported total the visible
/// sum stands in.
pub fn display_total(field: &StatisticField, filtered: &Statistic, original_total: Option<u64>) -> u64 {
    match FieldStrategy::for_field(field).total_rule {
        TotalRule::SurvivingKeys => filtered.len() as u64,
        TotalRule::Reported => original_total.unwrap_or_else(|| filtered.sum()),
    }
}

pub fn label(field: &StatisticField, value: &str, caps: &Capabilities<'_>) -> Label {
    (FieldStrategy::for_field(field).label_renderer)(value, caps)
}

/// "12 countries", "1 entity type", ...
pub fn total_label(field: &StatisticField, total: u64, messages: &dyn MessageCatalog) -> String {
    let (prefix, one, other) = FieldStrategy::for_field(field).total_message;
    let one = messages.message(&format!("{}.one", prefix), one);
    let other = messages.message(&format!("{}.other", prefix), other);
    plural(total, &one, &other)
}

/// Builds the full panel state for one facet.
pub fn present(props: StatisticsProps<'_>, caps: &Capabilities<'_>, page_size: usize) -> StatisticsView {
    let Some(values) = props.values else {
        debug!(field = %props.field, collection = props.collection, "statistic pending");
        return StatisticsView::Pending {
            field: props.field.clone(),
        };
    };

    let filtered = filter(props.field, values, caps.types);
    let total = display_total(props.field, &filtered, props.total);

    let mut rows: Vec<StatRow> = filtered
        .entries()
        .into_iter()
        .map(|StatisticEntry { value, count }| StatRow {
            label: label(props.field, &value, caps),
            link: caps.links.stat_link(props.collection, props.field, &value),
            value,
            count,
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));

    StatisticsView::Loaded(LoadedView::new(
        props.field.clone(),
        total,
        total_label(props.field, total, caps.messages),
        rows,
        page_size,
        caps.messages.message(crate::locale::MSG_SHOW_MORE, "Show more"),
    ))
}

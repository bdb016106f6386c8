use super::Label;
use crate::field::StatisticField;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatRow {
    pub value: String,
    pub label: Label,
    pub count: u64,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum StatisticsView {
    Pending { field: StatisticField },
    Loaded(LoadedView),
}

impl StatisticsView {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    pub fn field(&self) -> &StatisticField {
        match self {
            Self::Pending { field } => field,
            Self::Loaded(view) => &view.field,
        }
    }

    pub fn loaded(&self) -> Option<&LoadedView> {
        match self {
            Self::Loaded(view) => Some(view),
            Self::Pending { .. } => None,
        }
    }

    pub fn loaded_mut(&mut self) -> Option<&mut LoadedView> {
        match self {
            Self::Loaded(view) => Some(view),
            Self::Pending { .. } => None,
        }
    }
}

/// A loaded facet panel with a growing window of visible rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadedView {
    pub field: StatisticField,
    pub total: u64,
    pub total_label: String,
    pub rows: Vec<StatRow>,
    pub show_more_label: String,
    page_size: usize,
    visible: usize,
}

impl LoadedView {
    pub fn new(
        field: StatisticField,
        total: u64,
        total_label: String,
        rows: Vec<StatRow>,
        page_size: usize,
        show_more_label: String,
    ) -> Self {
        let page_size = page_size.max(1);
        let visible = page_size.min(rows.len());
        Self {
            field,
            total,
            total_label,
            rows,
            show_more_label,
            page_size,
            visible,
        }
    }

    pub fn visible_rows(&self) -> &[StatRow] {
        &self.rows[..self.visible]
    }

    pub fn hidden_count(&self) -> usize {
        self.rows.len() - self.visible
    }

    pub fn has_more(&self) -> bool {
        self.hidden_count() > 0
    }

    /// Reveals one more page. Returns how many rows became visible.
    pub fn show_more(&mut self) -> usize {
        let before = self.visible;
        self.visible = (self.visible + self.page_size).min(self.rows.len());
        self.visible - before
    }

    pub fn show_all(&mut self) {
        self.visible = self.rows.len();
    }
}

/// Pager position derived from the last settled total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub pages: u64,
    pub total: u64,
}

impl Pager {
    /// `pages = max(1, ceil(total / limit))`.
    pub fn compute(page: u32, limit: u32, total: u64) -> Self {
        let limit = u64::from(limit.max(1));
        let pages = total.div_ceil(limit).max(1);
        Self { page, pages, total }
    }

    pub fn prev_disabled(&self) -> bool {
        self.page <= 1
    }

    pub fn next_disabled(&self) -> bool {
        u64::from(self.page) >= self.pages
    }

    pub fn label(&self) -> String {
        format!(
            "Page {} of {} - {} results",
            self.page, self.pages, self.total
        )
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::compute(1, 1, 0)
    }
}

/// Which empty-state banner is showing. At most one can be, by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyState {
    #[default]
    Hidden,
    /// The collection itself is empty.
    NoData,
    /// The collection has records but this page has none.
    NoResults,
}

impl EmptyState {
    pub fn classify(total: u64, row_count: usize) -> Self {
        if total == 0 {
            EmptyState::NoData
        } else if row_count == 0 {
            EmptyState::NoResults
        } else {
            EmptyState::Hidden
        }
    }

    pub fn no_data_visible(self) -> bool {
        self == EmptyState::NoData
    }

    pub fn no_results_visible(self) -> bool {
        self == EmptyState::NoResults
    }
}

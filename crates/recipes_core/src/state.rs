use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use recipes_logging::{recipes_debug, recipes_info, recipes_warn};

use crate::local_filter::filter_serves;
use crate::query::{build_request, RequestDescriptor};
use crate::{
    Debouncer, EmptyState, FilterKey, Filters, Pager, Record, RecordPage, Statistics,
};

pub type RequestId = u64;

/// Settlement of one page fetch. Failures carry the human-readable reason.
pub type FetchOutcome = Result<RecordPage, String>;

pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 50, 100];
pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSettings {
    pub default_limit: u32,
    pub filter_debounce: Duration,
    pub serves_debounce: Duration,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_PAGE_SIZE,
            filter_debounce: Duration::from_millis(300),
            serves_debounce: Duration::from_millis(200),
        }
    }
}

/// Text inputs that feed the table: the server filters plus the local serves filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InputId {
    Filter(FilterKey),
    Serves,
}

impl InputId {
    pub const ALL: [InputId; 6] = [
        InputId::Filter(FilterKey::Title),
        InputId::Filter(FilterKey::Cuisine),
        InputId::Filter(FilterKey::Rating),
        InputId::Filter(FilterKey::TotalTime),
        InputId::Filter(FilterKey::Calories),
        InputId::Serves,
    ];
}

/// What the table body currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Loading,
    /// Indices into the cache, in display order.
    Rows(Vec<usize>),
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    pub record: Record,
    pub times_expanded: bool,
}

/// A fetch admitted by `begin_fetch`; the caller performs the network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub request_id: RequestId,
    pub request: RequestDescriptor,
}

/// Single source of truth for one table view.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    settings: TableSettings,
    page: u32,
    limit: u32,
    total: u64,
    filters: Filters,
    cache: Vec<Record>,
    is_loading: bool,
    in_flight: Option<RequestId>,
    next_request_id: RequestId,
    body: TableBody,
    pager: Pager,
    empty_state: EmptyState,
    detail: Option<DetailState>,
    statistics: Option<Statistics>,
    debouncers: BTreeMap<InputId, Debouncer<String>>,
    dirty: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(TableSettings::default())
    }
}

impl ViewState {
    pub fn new(settings: TableSettings) -> Self {
        let limit = if PAGE_SIZE_OPTIONS.contains(&settings.default_limit) {
            settings.default_limit
        } else {
            DEFAULT_PAGE_SIZE
        };
        let debouncers = InputId::ALL
            .iter()
            .map(|input| {
                let delay = match input {
                    InputId::Filter(_) => settings.filter_debounce,
                    InputId::Serves => settings.serves_debounce,
                };
                (*input, Debouncer::new(delay))
            })
            .collect();
        Self {
            settings,
            page: 1,
            limit,
            total: 0,
            filters: Filters::default(),
            cache: Vec::new(),
            is_loading: false,
            in_flight: None,
            next_request_id: 1,
            body: TableBody::Rows(Vec::new()),
            pager: Pager::compute(1, limit, 0),
            empty_state: EmptyState::Hidden,
            detail: None,
            statistics: None,
            debouncers,
            dirty: false,
        }
    }

    pub fn settings(&self) -> &TableSettings {
        &self.settings
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn cache(&self) -> &[Record] {
        &self.cache
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn body(&self) -> &TableBody {
        &self.body
    }

    pub fn pager(&self) -> Pager {
        self.pager
    }

    pub fn empty_state(&self) -> EmptyState {
        self.empty_state
    }

    pub fn detail(&self) -> Option<&DetailState> {
        self.detail.as_ref()
    }

    pub fn statistics(&self) -> Option<&Statistics> {
        self.statistics.as_ref()
    }

    /// Admission control: refuses while a fetch is outstanding, otherwise marks
    /// the view as loading and snapshots the query.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if self.is_loading {
            recipes_debug!(
                "Fetch dropped: request {:?} still in flight",
                self.in_flight
            );
            return None;
        }
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.is_loading = true;
        self.in_flight = Some(request_id);
        self.body = TableBody::Loading;
        self.dirty = true;

        let request = build_request(&self.filters, self.page, self.limit);
        recipes_debug!(
            "Fetch {} admitted: {:?} page={} limit={}",
            request_id,
            request.mode,
            request.page,
            request.limit
        );
        Some(FetchTicket {
            request_id,
            request,
        })
    }

    /// Applies a settled fetch. `total` and `cache` change only on success;
    /// the loading flag is cleared on every path.
    pub fn settle_fetch(&mut self, request_id: RequestId, outcome: FetchOutcome) {
        if self.in_flight != Some(request_id) {
            recipes_warn!(
                "Ignoring settlement for request {} (in flight: {:?})",
                request_id,
                self.in_flight
            );
            return;
        }

        match outcome {
            Ok(page) => {
                self.total = page.total.unwrap_or(0);
                self.cache = page.data.unwrap_or_default();
                self.body = TableBody::Rows((0..self.cache.len()).collect());
                self.empty_state = EmptyState::classify(self.total, self.cache.len());
                recipes_info!(
                    "Fetch {} loaded {} rows of {}",
                    request_id,
                    self.cache.len(),
                    self.total
                );
            }
            Err(reason) => {
                recipes_warn!("Fetch {} failed: {}", request_id, reason);
                self.body = TableBody::Error(format!(
                    "Failed to load recipes: {reason}. Please try again."
                ));
                self.empty_state = EmptyState::Hidden;
            }
        }
        self.pager = Pager::compute(self.page, self.limit, self.total);
        self.dirty = true;
        self.in_flight = None;
        self.is_loading = false;
    }

    /// Shows only cached rows whose `serves` contains `query`. Never touches
    /// `total` or `page`, and is skipped while the loading indicator is up.
    pub fn apply_serves_filter(&mut self, query: &str) {
        if self.is_loading {
            recipes_debug!("Serves filter skipped while loading");
            return;
        }
        self.body = TableBody::Rows(filter_serves(&self.cache, query));
        self.dirty = true;
    }

    pub fn set_filter(&mut self, key: FilterKey, value: &str) {
        self.filters.set(key, value.trim());
        self.page = 1;
        self.dirty = true;
    }

    pub fn reset_filters(&mut self) {
        self.filters.clear();
        for debouncer in self.debouncers.values_mut() {
            debouncer.cancel();
        }
        self.page = 1;
        self.dirty = true;
    }

    /// Returns false for sizes outside `PAGE_SIZE_OPTIONS`.
    pub fn set_page_size(&mut self, limit: u32) -> bool {
        if !PAGE_SIZE_OPTIONS.contains(&limit) {
            recipes_warn!("Rejected page size {}", limit);
            return false;
        }
        self.limit = limit;
        self.page = 1;
        self.dirty = true;
        true
    }

    pub fn can_go_prev(&self) -> bool {
        !self.is_loading && !self.pager.prev_disabled()
    }

    pub fn can_go_next(&self) -> bool {
        !self.is_loading && !self.pager.next_disabled()
    }

    pub fn go_prev(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
        self.dirty = true;
    }

    pub fn go_next(&mut self) {
        self.page += 1;
        self.dirty = true;
    }

    pub fn schedule_input(&mut self, input: InputId, text: String, now: Instant) {
        if let Some(debouncer) = self.debouncers.get_mut(&input) {
            debouncer.schedule(text, now);
        }
    }

    /// Drains every input whose debounce deadline has passed, in `InputId` order.
    pub fn take_due_inputs(&mut self, now: Instant) -> Vec<(InputId, String)> {
        self.debouncers
            .iter_mut()
            .filter_map(|(input, debouncer)| debouncer.poll(now).map(|text| (*input, text)))
            .collect()
    }

    pub fn has_pending_input(&self) -> bool {
        self.debouncers.values().any(Debouncer::is_pending)
    }

    /// Opens the detail view for the `row`-th visible row.
    pub fn open_detail(&mut self, row: usize) -> bool {
        let TableBody::Rows(indices) = &self.body else {
            return false;
        };
        let Some(record) = indices.get(row).and_then(|index| self.cache.get(*index)) else {
            return false;
        };
        self.detail = Some(DetailState {
            record: record.clone(),
            times_expanded: false,
        });
        self.dirty = true;
        true
    }

    pub fn close_detail(&mut self) {
        if self.detail.take().is_some() {
            self.dirty = true;
        }
    }

    pub fn toggle_times(&mut self) {
        if let Some(detail) = self.detail.as_mut() {
            detail.times_expanded = !detail.times_expanded;
            self.dirty = true;
        }
    }

    pub fn set_statistics(&mut self, statistics: Statistics) {
        self.statistics = Some(statistics);
        self.dirty = true;
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

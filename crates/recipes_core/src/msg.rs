use std::time::Instant;

use crate::{FetchOutcome, InputId, RequestId, Statistics};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// View is up; load the first page.
    Started,
    /// User edited a filter input (raw text, debounced before it applies).
    FilterEdited {
        input: InputId,
        text: String,
        at: Instant,
    },
    /// Clock tick that fires due debouncers.
    Tick { now: Instant },
    /// User picked a page size.
    PageSizeChanged(u32),
    PrevPageClicked,
    NextPageClicked,
    ResetFiltersClicked,
    /// Explicit reload of the current page.
    FetchRequested,
    /// Engine settled a page fetch.
    FetchSettled {
        request_id: RequestId,
        outcome: FetchOutcome,
    },
    /// Engine delivered collection statistics.
    StatsLoaded(Statistics),
    /// User activated the n-th visible row.
    RowActivated(usize),
    DetailClosed,
    /// User expanded or collapsed the times section of the detail view.
    TimesToggled,
}

//! Recipe table core: pure state machine, query building and view-model helpers.
mod debounce;
mod effect;
mod expr;
mod filters;
mod local_filter;
mod msg;
mod pager;
mod query;
mod record;
mod state;
mod update;
mod view_model;

pub use debounce::Debouncer;
pub use effect::Effect;
pub use expr::{parse_comparison, CompareOp, Comparison};
pub use filters::{FilterKey, Filters};
pub use local_filter::filter_serves;
pub use msg::Msg;
pub use pager::{EmptyState, Pager};
pub use query::{build_request, QueryError, QueryMode, RequestDescriptor};
pub use record::{format_number, NutrientValue, Record, RecordPage, Statistics};
pub use state::{
    DetailState, FetchOutcome, FetchTicket, InputId, RequestId, TableBody, TableSettings,
    ViewState, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS,
};
pub use update::update;
pub use view_model::{
    BodyView, DetailView, FilterView, NutrientRow, PagerView, RowView, StarRating,
    TableViewModel, NUTRIENT_ORDER, STAR_SCALE,
};

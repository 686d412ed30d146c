use thiserror::Error;
use url::Url;

use crate::Filters;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    /// Plain page of the whole collection.
    List,
    /// At least one server filter is set.
    Search,
}

/// One page request, built per fetch from a snapshot of the filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub mode: QueryMode,
    pub page: u32,
    pub limit: u32,
    pub filters: Filters,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("base url cannot carry a path: {0}")]
    CannotBeABase(String),
}

/// Chooses the query mode and snapshots the filters for one fetch.
pub fn build_request(filters: &Filters, page: u32, limit: u32) -> RequestDescriptor {
    let mode = if filters.has_any() {
        QueryMode::Search
    } else {
        QueryMode::List
    };
    RequestDescriptor {
        mode,
        page,
        limit,
        filters: filters.clone(),
    }
}

impl RequestDescriptor {
    /// Query parameters in send order: set filters by key order, then `page`, then `limit`.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if self.mode == QueryMode::Search {
            params.extend(
                self.filters
                    .iter()
                    .filter(|(_, value)| !value.trim().is_empty())
                    .map(|(key, value)| (key.param_name(), value.to_string())),
            );
        }
        params.push(("page", self.page.to_string()));
        params.push(("limit", self.limit.to_string()));
        params
    }

    /// Resolves against the collection endpoint; search requests go to `<base>/search`.
    pub fn to_url(&self, base: &Url) -> Result<Url, QueryError> {
        let mut url = base.clone();
        url.set_query(None);
        if self.mode == QueryMode::Search {
            url.path_segments_mut()
                .map_err(|()| QueryError::CannotBeABase(base.to_string()))?
                .pop_if_empty()
                .push("search");
        }
        url.query_pairs_mut().extend_pairs(self.params());
        Ok(url)
    }
}

use crate::{RequestDescriptor, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchPage {
        request_id: RequestId,
        request: RequestDescriptor,
    },
    FetchStats,
}

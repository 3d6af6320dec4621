//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};

use hirehub_core::types::pagination::PageRequest;

/// Query parameters for paginated endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based, default: 1).
    pub page: Option<u64>,
    /// Items per page (default: 10, max: 100).
    pub page_size: Option<u64>,
}

impl PaginationParams {
    /// Converts to a `PageRequest`, applying defaults and clamping.
    pub fn into_page_request(self) -> PageRequest {
        let default = PageRequest::default();
        PageRequest::new(
            self.page.unwrap_or(default.page),
            self.page_size.unwrap_or(default.page_size),
        )
    }
}

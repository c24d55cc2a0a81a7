//! List and search query parameters

use serde::Deserialize;

/// Maximum rows a single request may ask for
const MAX_LIMIT: u32 = 100;

/// Default window size
const DEFAULT_LIMIT: u32 = 50;

/// An offset/limit window over the questions table.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    pub skip: u32,
    pub limit: u32,
}

impl Window {
    /// Create a window, capping limit at 100. A zero limit is allowed
    /// and yields an empty page.
    pub fn new(skip: u32, limit: u32) -> Self {
        Self {
            skip,
            limit: limit.min(MAX_LIMIT),
        }
    }
}

impl Default for Window {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Query parameters for GET /questions
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl From<ListParams> for Window {
    fn from(params: ListParams) -> Self {
        Self::new(
            params.skip.unwrap_or(0),
            params.limit.unwrap_or(DEFAULT_LIMIT),
        )
    }
}

/// Query parameters for GET /questions/search
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub limit: Option<u32>,
}

impl SearchParams {
    /// Effective result cap, capped like list windows.
    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT)
    }
}

//! Pagination over already-fetched result rows

use serde::Serialize;

use super::filters::parse_int_prefix;

/// Maximum items per page
const MAX_PER_PAGE: u64 = 100;

/// Default items per page
const DEFAULT_PER_PAGE: u64 = 20;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u64,
    /// Items per page (max 100)
    pub per_page: u64,
}

impl Pagination {
    /// Create pagination with clamping.
    ///
    /// - Page is clamped to minimum of 1
    /// - Per page is clamped to 1..=100
    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            page: page.max(1) as u64,
            per_page: per_page.clamp(1, MAX_PER_PAGE as i64) as u64,
        }
    }

    /// Number of rows before the first row of this page.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Page metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Row count before slicing
    pub total: u64,
    pub per_page: u64,
    pub current_page: u64,
    /// Never below 1, even for an empty result
    pub last_page: u64,
}

/// One page of rows plus metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

/// Slice `rows` down to the requested page.
///
/// Pure post-processing: a page past the end is empty, not an error.
pub fn paginate<T>(rows: Vec<T>, pagination: Pagination) -> Page<T> {
    let total = rows.len() as u64;
    let skip = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);
    let take = usize::try_from(pagination.per_page).unwrap_or(usize::MAX);

    let data = rows.into_iter().skip(skip).take(take).collect();

    Page {
        data,
        meta: PageMeta {
            total,
            per_page: pagination.per_page,
            current_page: pagination.page,
            last_page: total.div_ceil(pagination.per_page).max(1),
        },
    }
}

/// Raw `page` / `per_page` query values
///
/// Kept as raw strings so that malformed numbers degrade to the clamp
/// instead of rejecting the request.
#[derive(Debug, Clone, Default)]
pub struct PaginationParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self::new(
            params.page.as_deref().map(parse_int_prefix).unwrap_or(1),
            params
                .per_page
                .as_deref()
                .map(parse_int_prefix)
                .unwrap_or(DEFAULT_PER_PAGE as i64),
        )
    }
}

//! Pagination request parameters and response metadata.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::util::parse::lenient_u64;

/// Page size applied when the client sends none (or garbage).
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Paging controls parsed from the query string.
///
/// Both parameters are lenient: absent, non-numeric, or zero values fall
/// back to page 1 and the default page size rather than rejecting the
/// request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct PageParams {
    /// 1-indexed page number.
    #[serde(default, deserialize_with = "lenient_u64")]
    pub page: Option<u64>,
    /// Number of records per page.
    #[serde(default, rename = "pageSize", deserialize_with = "lenient_u64")]
    pub page_size: Option<u64>,
}

impl PageParams {
    /// Effective page number (≥ 1).
    pub fn page(&self) -> u64 {
        match self.page {
            Some(page) if page >= 1 => page,
            _ => 1,
        }
    }

    /// Effective page size (≥ 1).
    pub fn page_size(&self) -> u64 {
        match self.page_size {
            Some(size) if size >= 1 => size,
            _ => DEFAULT_PAGE_SIZE,
        }
    }
}

/// Pagination metadata attached to every list response.
///
/// `total` counts all records matching the filter irrespective of paging, so
/// an out-of-range page still reports the true collection size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageMeta {
    /// Derives metadata from the effective paging controls and the total
    /// matching-record count.
    pub fn new(page: u64, page_size: u64, total: u64) -> Self {
        let total_pages = total.div_ceil(page_size);
        Self {
            page,
            page_size,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

/// One page of records plus its metadata.
#[derive(Debug)]
pub struct Page<T> {
    pub records: Vec<T>,
    pub meta: PageMeta,
}

//! Listing and pagination types for list endpoints.
//!
//! A list request is unpaginated unless both `page` and `limit` are
//! positive. Pages are 1-based and requesting one past the end yields an
//! empty list rather than an error.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::config::SORT_DESC;

/// Direction applied to the listing sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Lenient parse: only `desc` (any case) selects descending order.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.trim().eq_ignore_ascii_case(SORT_DESC) => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

impl From<SortOrder> for sea_orm::Order {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => sea_orm::Order::Asc,
            SortOrder::Desc => sea_orm::Order::Desc,
        }
    }
}

/// Raw list query parameters as they arrive on the URL.
///
/// Kept as strings so that malformed numbers fall back to "no pagination"
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// 1-based page number; 0 or absent returns every record
    #[param(example = "1")]
    pub page: Option<String>,
    /// Page size; 0 or absent returns every record
    #[param(example = "10")]
    pub limit: Option<String>,
    /// `asc` (default) or `desc`
    #[param(example = "asc")]
    pub sort: Option<String>,
}

/// Validated listing request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListQuery {
    pub page: i64,
    pub limit: i64,
    pub sort: SortOrder,
}

const MAX_BOUND: u64 = i64::MAX as u64;

/// Row range selected by a paginated query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u64,
    pub limit: u64,
}

impl ListQuery {
    pub fn new(page: i64, limit: i64, sort: SortOrder) -> Self {
        Self { page, limit, sort }
    }

    /// Every record, in `sort` order.
    pub fn all(sort: SortOrder) -> Self {
        Self::new(0, 0, sort)
    }

    /// The slice `[(page-1)*limit, page*limit)`, or `None` when unpaginated.
    ///
    /// Both bounds stay within `i64` so every backend can bind them; an
    /// offset past that simply selects nothing.
    pub fn window(&self) -> Option<PageWindow> {
        if self.page <= 0 || self.limit <= 0 {
            return None;
        }

        let page = self.page.unsigned_abs();
        let limit = self.limit.unsigned_abs();
        Some(PageWindow {
            offset: (page - 1).saturating_mul(limit).min(MAX_BOUND),
            limit: limit.min(MAX_BOUND),
        })
    }
}

impl From<ListParams> for ListQuery {
    fn from(params: ListParams) -> Self {
        Self {
            page: parse_or_zero(params.page.as_deref()),
            limit: parse_or_zero(params.limit.as_deref()),
            sort: SortOrder::parse(params.sort.as_deref()),
        }
    }
}

fn parse_or_zero(raw: Option<&str>) -> i64 {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

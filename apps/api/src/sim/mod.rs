//! The simulated API layer.
//!
//! Every endpoint here behaves like a real REST backend: it first sleeps for
//! a random latency window, mutating endpoints then roll an injected failure
//! before touching the store, and the operation itself runs against the
//! persistent store and yields a REST-shaped result. Callers reach these
//! functions either through the Axum routes or through the in-process
//! dispatch in [`router`].

pub mod assessments;
pub mod candidates;
pub mod chaos;
pub mod jobs;
pub mod router;

use serde::{Deserialize, Serialize};

/// Injected failure rates, mirrored per endpoint from the emulated backend.
pub const CREATE_FAILURE_RATE: f64 = 0.08;
pub const WRITE_FAILURE_RATE: f64 = 0.06;
pub const REORDER_FAILURE_RATE: f64 = 0.08;

pub const DEFAULT_JOB_PAGE_SIZE: i64 = 9;
pub const DEFAULT_CANDIDATE_PAGE_SIZE: i64 = 50;

/// One page of a filtered listing. `total` is the filtered count computed
/// before pagination, never the length of `items`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

/// Slices a pre-filtered, pre-sorted listing into a page. Page numbers are
/// 1-based; an out-of-range page yields an empty items list with the full
/// total intact.
pub(crate) fn paginate<T>(rows: Vec<T>, page: i64, page_size: i64) -> Page<T> {
    let total = rows.len();
    let page = page.max(1);
    let page_size = page_size.max(1);
    let start = ((page - 1) * page_size) as usize;
    let items = rows
        .into_iter()
        .skip(start)
        .take(page_size as usize)
        .collect();
    Page { items, total }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_total_is_prefilter_count() {
        let page = paginate((0..10).collect::<Vec<_>>(), 2, 3);
        assert_eq!(page.items, vec![3, 4, 5]);
        assert_eq!(page.total, 10);
    }

    #[test]
    fn test_paginate_out_of_range_page() {
        let page = paginate(vec![1, 2, 3], 5, 2);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 3);
    }
}

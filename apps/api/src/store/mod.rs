//! Durable, queryable storage for the three record collections.
//!
//! Each submodule exposes free async functions over a `&SqlitePool`:
//! get-by-key, put (upsert), add (insert, fails on an existing key),
//! delete-by-key, bulk-add, full scan, and indexed-equality lookups.
//! Multi-record reindex writes (reorder, delete-with-reindex) run inside a
//! single transaction; an abort leaves no partial state.

pub mod assessments;
pub mod candidates;
pub mod jobs;

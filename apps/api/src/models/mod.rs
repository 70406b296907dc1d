pub mod assessment;
pub mod candidate;
pub mod job;

/// Current wall-clock time as epoch milliseconds, the timestamp unit used
/// across all records and timeline events.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

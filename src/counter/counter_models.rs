use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The counter series used to allocate task ids.
pub const TASK_ID_SERIES: &str = "TaskID";

/// A named, monotonically increasing sequence. `value` is the last id
/// handed out for the series; it never decreases and is never reset by
/// task deletion, so ids are unique but not contiguous.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Counter {
    pub name: String,
    pub value: i64,
}

use crate::counter::counter_models::Counter;
use crate::db::DbPool;
use crate::error::{AppError, Result};

#[derive(Clone)]
pub struct CounterRepository {
    pool: DbPool,
}

impl CounterRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Hands out the next id for `series` as a single atomic upsert:
    /// inserting the row with value 1 if the series is new, otherwise
    /// incrementing it. Two concurrent callers can never receive the
    /// same value, even on a first allocation against an empty table.
    pub async fn allocate(&self, series: &str) -> Result<Counter> {
        let counter = sqlx::query_as::<_, Counter>(
            "INSERT INTO counters (name, value) VALUES ($1, 1)
             ON CONFLICT (name) DO UPDATE SET value = counters.value + 1
             RETURNING name, value",
        )
        .bind(series)
        .fetch_optional(&self.pool)
        .await?;

        counter.ok_or_else(|| {
            AppError::Allocation(format!("counter upsert returned no row for series '{series}'"))
        })
    }
}

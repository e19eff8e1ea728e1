pub mod counter_models;
pub mod counter_repository;

pub use counter_models::{Counter, TASK_ID_SERIES};
pub use counter_repository::CounterRepository;

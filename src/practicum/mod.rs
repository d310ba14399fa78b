pub mod client;
pub mod error;
pub mod types;

pub use client::{HomeworkSource, PracticumClient};
pub use error::PracticumError;
pub use types::{HomeworkRecord, HomeworkStatus};

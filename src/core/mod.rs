pub mod draw;
pub mod engine;
pub mod loader;
pub mod pipeline;
pub mod report;
pub mod rng;

pub use crate::domain::model::{DrawConfig, DrawOutcome, DrawResult, ParticipantSet};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;

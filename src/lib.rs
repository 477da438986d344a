pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig, DrawSettings};
pub use crate::core::{
    draw::{draw, verify, Verification},
    engine::DrawEngine,
    pipeline::DrawPipeline,
};
pub use domain::model::{DrawConfig, DrawResult, Identifier, ParticipantSet, Tier};
pub use utils::error::{DrawError, Result};

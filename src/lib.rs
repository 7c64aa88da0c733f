pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use crate::core::{
    batch_pipeline::BatchPipeline, catalog::StaticCatalog, engine::BatchEngine,
    predictor::Predictor,
};
pub use config::{local_storage::LocalStorage, toml_config::BatchConfig};
pub use domain::model::{PredictionRequest, PredictionResponse, ZodiacSign};
pub use utils::error::{AstroError, Result};

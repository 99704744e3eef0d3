//! Shared domain types and configuration for the listing optimizer.

pub mod app_config;
pub mod config;
pub mod demo;
pub mod product;
pub mod suggestion;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use product::{is_catalog_id, ProductRecord};
pub use suggestion::{AnalysisResult, OptimizationSuggestion, SuggestionBundle, SuggestionKind};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

mod app_config;
mod config;
mod model;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use model::{
    BrandContext, CompetitorReport, ContactInfo, FaqItem, ImportantLinks, Policy, PolicyKind,
    Product, SocialLinks,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

pub mod config;

pub use config::{
    gemini_api_key, gemini_model, init_app_config, AppConfig, Endpoints, ErrorSurfacing,
};

use dotenv::dotenv;
use std::env;

pub const DEFAULT_API_BASE: &str = "https://api.bandungkab.go.id";
pub const DEFAULT_TARGET_API_BASE: &str = "https://aplikasi.bandungkab.go.id";

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// How a failed analytical load is reported. The home phase always surfaces
/// its errors; for the analytical phase the policy is configurable via
/// `MBG_ANALYTICAL_ERRORS=log|surface` and defaults to log-only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorSurfacing {
    /// Log the failure and keep whatever state is already on screen.
    #[default]
    LogOnly,
    /// Treat it like a home-phase failure: set the user-facing error state.
    Surface,
}

impl ErrorSurfacing {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "surface" => Self::Surface,
            _ => Self::LogOnly,
        }
    }
}

/// Resolved upstream endpoint URLs.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub sppg_units: String,
    pub potential: String,
    pub realizations: String,
    pub targets: String,
}

impl Endpoints {
    /// The facility, potential, and realization endpoints live on the main
    /// API host; targets are served from the application host.
    pub fn from_bases(api_base: &str, target_api_base: &str) -> Self {
        let api_base = api_base.trim_end_matches('/');
        let target_api_base = target_api_base.trim_end_matches('/');
        Self {
            sppg_units: format!("{api_base}/api/data/mbg---sppg---v"),
            potential: format!("{api_base}/api/data-penerima-manfaat-mbg"),
            realizations: format!("{api_base}/api/data/survey-penerima-manfaat-mbg-oleh-sppg"),
            targets: format!("{target_api_base}/api/target-penerima-manfaat-mbg"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub endpoints: Endpoints,
    pub analytical_errors: ErrorSurfacing,
}

/// Initializes the application configuration from `.env` and the process
/// environment. Every value has a default, so this cannot fail.
pub fn init_app_config() -> AppConfig {
    dotenv().ok();

    let api_base = env::var("MBG_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
    let target_api_base =
        env::var("MBG_TARGET_API_BASE").unwrap_or_else(|_| DEFAULT_TARGET_API_BASE.to_string());
    let analytical_errors = env::var("MBG_ANALYTICAL_ERRORS")
        .map(|value| ErrorSurfacing::parse(&value))
        .unwrap_or_default();

    AppConfig {
        endpoints: Endpoints::from_bases(&api_base, &target_api_base),
        analytical_errors,
    }
}

/// The assistant credential is re-read on every call so a rotated key takes
/// effect without a restart.
pub fn gemini_api_key() -> Option<String> {
    env::var("GEMINI_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty())
}

pub fn gemini_model() -> String {
    env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_strip_trailing_slashes() {
        let endpoints = Endpoints::from_bases("https://api.example/", "https://app.example");
        assert_eq!(
            endpoints.sppg_units,
            "https://api.example/api/data/mbg---sppg---v"
        );
        assert_eq!(
            endpoints.targets,
            "https://app.example/api/target-penerima-manfaat-mbg"
        );
    }

    #[test]
    fn error_surfacing_defaults_to_log_only() {
        assert_eq!(ErrorSurfacing::parse("surface"), ErrorSurfacing::Surface);
        assert_eq!(ErrorSurfacing::parse("SURFACE"), ErrorSurfacing::Surface);
        assert_eq!(ErrorSurfacing::parse("log"), ErrorSurfacing::LogOnly);
        assert_eq!(ErrorSurfacing::parse("anything"), ErrorSurfacing::LogOnly);
    }
}

//! Server configuration, loaded from environment variables at startup.

/// Runtime configuration for reelsight-server.
///
/// Every field has a default matching the deployment this server was built
/// for, so it works out-of-the-box without any environment variables set.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind (default: `"0.0.0.0:5000"`).
    pub bind_address: String,

    /// Path to the Google service-account JSON key file.
    pub credentials_path: String,

    /// Google Cloud project hosting the Vertex AI model.
    pub project_id: String,

    /// Vertex AI region, e.g. `"europe-central2"`.
    pub location: String,

    /// Cloud Storage bucket uploaded videos are written to.
    pub bucket: String,

    /// Gemini model identifier.
    pub model: String,

    /// Directory holding the prebuilt frontend bundle.
    pub dist_dir: String,

    /// Maximum accepted request body size in MiB.
    pub max_upload_mb: usize,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Comma-separated CORS origin allowlist; `None` means wildcard.
    pub cors_allowed_origins: Option<String>,

    /// Serve Swagger UI at `/swagger-ui` (disable in production).
    pub enable_swagger: bool,
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            bind_address: env_or("REELSIGHT_BIND", "0.0.0.0:5000"),
            credentials_path: env_or(
                "REELSIGHT_CREDENTIALS",
                "tr-media-analysis-be9da703ffec.json",
            ),
            project_id: env_or("REELSIGHT_PROJECT", "tr-media-analysis"),
            location: env_or("REELSIGHT_LOCATION", "europe-central2"),
            bucket: env_or("REELSIGHT_BUCKET", "video-marketing"),
            model: env_or("REELSIGHT_MODEL", "gemini-1.5-pro-002"),
            dist_dir: env_or("REELSIGHT_DIST_DIR", "marketing-agent-fe/dist"),
            max_upload_mb: parse_env("REELSIGHT_MAX_UPLOAD_MB", 100),
            log_level: env_or("REELSIGHT_LOG", "info"),
            log_json: env_flag("REELSIGHT_LOG_JSON", false),
            cors_allowed_origins: std::env::var("REELSIGHT_CORS_ORIGINS").ok(),
            enable_swagger: env_flag("REELSIGHT_ENABLE_SWAGGER", true),
        }
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_flag(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    // Environment mutation is process-global, so everything touching the
    // REELSIGHT_* variables lives in a single test.
    #[test]
    fn defaults_and_overrides() {
        unsafe {
            std::env::remove_var("REELSIGHT_BUCKET");
            std::env::remove_var("REELSIGHT_MAX_UPLOAD_MB");
            std::env::remove_var("REELSIGHT_LOG_JSON");
        }
        let cfg = Config::from_env();
        assert_eq!(cfg.bind_address, "0.0.0.0:5000");
        assert_eq!(cfg.bucket, "video-marketing");
        assert_eq!(cfg.location, "europe-central2");
        assert_eq!(cfg.model, "gemini-1.5-pro-002");
        assert_eq!(cfg.dist_dir, "marketing-agent-fe/dist");
        assert_eq!(cfg.max_upload_mb, 100);
        assert!(!cfg.log_json);
        assert!(cfg.enable_swagger);

        unsafe {
            std::env::set_var("REELSIGHT_BUCKET", "other-bucket");
            std::env::set_var("REELSIGHT_MAX_UPLOAD_MB", "not-a-number");
            std::env::set_var("REELSIGHT_LOG_JSON", "TRUE");
        }
        let cfg = Config::from_env();
        assert_eq!(cfg.bucket, "other-bucket");
        // Unparseable values fall back to the default.
        assert_eq!(cfg.max_upload_mb, 100);
        assert!(cfg.log_json);

        unsafe {
            std::env::remove_var("REELSIGHT_BUCKET");
            std::env::remove_var("REELSIGHT_MAX_UPLOAD_MB");
            std::env::remove_var("REELSIGHT_LOG_JSON");
        }
    }
}

use shared_types::{AppConfig, AppError, SessionConfig};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Overrides [`CONFIG_PATH`].
const CONFIG_ENV: &str = "PRINTDESK_CONFIG";

/// Overrides `[session] file`.
#[cfg(not(target_arch = "wasm32"))]
const SESSION_FILE_ENV: &str = "PRINTDESK_SESSION_FILE";

/// Parse a config file. Missing files are an error here; callers decide
/// whether that is fatal.
pub fn read_config(path: &Path) -> Result<AppConfig, AppError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| AppError::config(format!("{}: {e}", path.display())))?;
    toml::from_str(&contents).map_err(|e| AppError::config(format!("{}: {e}", path.display())))
}

/// Load `.env`, then the config file, into the global `OnceLock`.
/// Safe to call multiple times; only the first call has effect.
///
/// If the file is missing or unparseable, every setting takes its default.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let path = std::env::var(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(CONFIG_PATH));
        match read_config(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded dashboard config");
                config
            }
            Err(e) => {
                tracing::warn!(error = %e, "using default dashboard config");
                AppConfig::default()
            }
        }
    })
}

/// The loaded config, loading it on first use.
pub fn app_config() -> &'static AppConfig {
    load_config()
}

/// Session file location: environment override, then `[session] file`,
/// then the platform data directory.
#[cfg(not(target_arch = "wasm32"))]
pub fn session_file(config: &SessionConfig) -> PathBuf {
    resolve_session_file(
        std::env::var(SESSION_FILE_ENV).ok(),
        config,
        dirs::data_local_dir(),
    )
}

#[cfg(any(not(target_arch = "wasm32"), test))]
fn resolve_session_file(
    env_override: Option<String>,
    config: &SessionConfig,
    data_dir: Option<PathBuf>,
) -> PathBuf {
    if let Some(path) = env_override.filter(|p| !p.trim().is_empty()) {
        return PathBuf::from(path);
    }
    if let Some(path) = &config.file {
        return PathBuf::from(path);
    }
    match data_dir {
        Some(dir) => dir.join("printdesk").join("session.json"),
        None => PathBuf::from("session.json"),
    }
}

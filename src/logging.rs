// src/logging.rs

//! Optional log setup for programs embedding the SDK. The client itself only
//! emits `tracing` events; nothing is recorded until a subscriber exists.

use color_eyre::eyre::Result;
use directories::ProjectDirs;
use lazy_static::lazy_static;
use std::path::PathBuf;
use tracing_error::ErrorLayer;
use tracing_subscriber::{self, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase();
    pub static ref LOG_ENV: String = format!("{}_LOGLEVEL", PROJECT_NAME.clone());
    pub static ref LOG_FILE: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("tools", "devsec", env!("CARGO_PKG_NAME"))
}

/// Directory the log file is written to, falling back to `./.data`.
pub fn get_data_dir() -> PathBuf {
    if let Some(proj_dirs) = project_directory() {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

/// Filter directive: `RUST_LOG`, then the crate-specific variable, then
/// `info` for this crate only.
pub fn log_filter() -> String {
    filter_from(std::env::var("RUST_LOG").ok(), std::env::var(LOG_ENV.as_str()).ok())
}

fn filter_from(rust_log: Option<String>, crate_log: Option<String>) -> String {
    rust_log
        .or(crate_log)
        .unwrap_or_else(|| format!("{}=info", env!("CARGO_CRATE_NAME")))
}

/// Installs a file-based tracing subscriber writing to [`get_data_dir`].
///
/// Fails if the directory or file cannot be created, or if a global
/// subscriber is already set.
pub fn initialize_logging() -> Result<PathBuf> {
    let directory = get_data_dir();
    std::fs::create_dir_all(&directory)?;
    let log_path = directory.join(LOG_FILE.as_str());
    let log_file = std::fs::File::create(&log_path)?;

    let file_subscriber = tracing_subscriber::fmt::layer()
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::new(log_filter()));

    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_derive_from_crate() {
        assert_eq!(PROJECT_NAME.as_str(), "DEVSECTOOLS_SDK");
        assert_eq!(LOG_ENV.as_str(), "DEVSECTOOLS_SDK_LOGLEVEL");
        assert_eq!(LOG_FILE.as_str(), "devsectools-sdk.log");
    }

    #[test]
    fn rust_log_wins_over_crate_variable() {
        assert_eq!(
            filter_from(Some("debug".into()), Some("warn".into())),
            "debug"
        );
        assert_eq!(filter_from(None, Some("warn".into())), "warn");
        assert_eq!(filter_from(None, None), "devsectools_sdk=info");
    }

    #[test]
    fn data_dir_ends_in_project_name() {
        let dir = get_data_dir();
        assert!(dir.to_string_lossy().contains("devsectools-sdk") || dir.ends_with(".data"));
    }
}

//! Error types for the settings crate.
//!
//! Configuration loading and validation, job files, and trajectory
//! records each get their own error type; [`SettingsError`] wraps them all.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use wallpath_core::ConfigurationError;

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The configuration file could not be loaded.
    #[error("Failed to load settings from {path}: {reason}")]
    LoadError { path: PathBuf, reason: String },

    /// The configuration file could not be saved.
    #[error("Failed to save settings to {path}: {reason}")]
    SaveError { path: PathBuf, reason: String },

    /// The configuration directory could not be found or created.
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    /// A configuration validation error occurred.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A job or record file error occurred.
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Errors related to configuration validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file format is not supported.
    #[error("Unsupported config format: {0} (expected .toml or .json)")]
    UnsupportedFormat(String),

    /// A configuration value is not one of the accepted values.
    #[error("Invalid value for '{key}': {value}")]
    InvalidValue { key: String, value: String },

    /// The default planner settings or limits are invalid.
    #[error("Invalid planner defaults: {0}")]
    Planner(#[from] ConfigurationError),
}

/// Errors related to job and trajectory record files.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The job file is structurally valid JSON but not a usable job.
    #[error("Invalid job file {path}: {reason}")]
    InvalidJob { path: PathBuf, reason: String },

    /// I/O error during persistence.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON error during persistence.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Result type alias for persistence operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

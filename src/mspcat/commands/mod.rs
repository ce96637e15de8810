use crate::config::CatalogConfig;
use crate::model::Service;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod duplicate;
pub mod export;
pub mod featuring;
pub mod list;
pub mod stats;
pub mod status;
pub mod update;
pub mod view;

pub use stats::CatalogStats;

#[derive(Debug, Clone)]
pub struct CatalogPaths {
    /// Holds the snapshot and config.json
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_services: Vec<Service>,
    pub listed_services: Vec<Service>,
    pub export_paths: Vec<PathBuf>,
    pub stats: Option<CatalogStats>,
    pub config: Option<CatalogConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_services(mut self, services: Vec<Service>) -> Self {
        self.affected_services = services;
        self
    }

    pub fn with_listed_services(mut self, services: Vec<Service>) -> Self {
        self.listed_services = services;
        self
    }

    pub fn with_export_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.export_paths = paths;
        self
    }

    pub fn with_stats(mut self, stats: CatalogStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: CatalogConfig) -> Self {
        self.config = Some(config);
        self
    }
}

//! Error types for rig loading and configuration.

use serde::{Deserialize, Serialize};

/// Errors surfaced by rig loading and bone graph construction.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum RigError {
    /// Document could not be read
    #[error("IO error reading {path}: {reason}")]
    Io { path: String, reason: String },

    /// Document could not be parsed into the expected payload shape
    #[error("Failed to parse {document}: {reason}")]
    Parse { document: String, reason: String },

    /// Sheet or sprite region unavailable. Logged, never returned by loads.
    #[error("Missing resource for sprite {sprite}: {reason}")]
    MissingResource { sprite: String, reason: String },

    /// A bone names a parent that is not part of the bone set
    #[error("Bone {bone} references unknown parent {parent}")]
    UnknownParent { bone: String, parent: String },

    /// Parent links form a cycle
    #[error("Bone parent cycle through: {}", bones.join(" -> "))]
    ConfigurationCycle { bones: Vec<String> },
}

impl RigError {
    pub(crate) fn parse(document: &str, err: impl std::fmt::Display) -> Self {
        Self::Parse {
            document: document.to_string(),
            reason: err.to_string(),
        }
    }

    /// Whether the rig's bone set is unusable after this error.
    #[inline]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::UnknownParent { .. } | Self::ConfigurationCycle { .. }
        )
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io { .. } | Self::Parse { .. } => "load",
            Self::MissingResource { .. } => "resource",
            Self::UnknownParent { .. } | Self::ConfigurationCycle { .. } => "configuration",
        }
    }
}

impl From<std::io::Error> for RigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: String::new(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RigError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse("document", err)
    }
}

pub type Result<T> = std::result::Result<T, RigError>;

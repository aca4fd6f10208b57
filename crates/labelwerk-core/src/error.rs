// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Labelwerk.

use thiserror::Error;

use crate::types::Symbology;

/// Top-level error type for all Labelwerk operations.
///
/// Symbology detection is total and never produces one of these.
#[derive(Debug, Error)]
pub enum LabelwerkError {
    // -- Input errors --
    #[error("input is empty")]
    EmptyInput,

    #[error("bulk input contains no codes")]
    MalformedBulkInput,

    #[error("unknown symbology: {0}")]
    UnknownSymbology(String),

    // -- Generation errors --
    #[error("{symbology} encoding failed: {reason}")]
    Encoding {
        symbology: Symbology,
        reason: String,
    },

    #[error("QR encoding failed: {0}")]
    QrCapacity(String),

    #[error("image encoding failed: {0}")]
    ImageError(String),

    #[error("generation task failed: {0}")]
    Task(String),

    // -- Artifacts and templates --
    #[error("invalid artifact: {0}")]
    InvalidArtifact(String),

    #[error("invalid sheet dimension: {0}")]
    InvalidDimension(String),

    #[error("unknown sheet preset: {0}")]
    UnknownSheet(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LabelwerkError {
    /// Shorthand for an encoder rejection.
    pub fn encoding(symbology: Symbology, reason: impl Into<String>) -> Self {
        Self::Encoding {
            symbology,
            reason: reason.into(),
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, LabelwerkError>;

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Labelwerk label generator.

use std::fmt;
use std::str::FromStr;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::error::{LabelwerkError, Result};

/// Barcode encoding scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbology {
    #[serde(rename = "CODE128", alias = "GENERAL")]
    Code128,
    #[serde(rename = "EAN13")]
    Ean13,
    /// UPC-A.
    #[serde(rename = "UPC")]
    Upc,
    #[serde(rename = "EAN8")]
    Ean8,
    #[serde(rename = "QR")]
    Qr,
}

impl Symbology {
    /// Every symbology, in the order the selector lists them.
    pub const ALL: [Symbology; 5] = [
        Self::Code128,
        Self::Ean13,
        Self::Upc,
        Self::Ean8,
        Self::Qr,
    ];

    /// Canonical upper-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Code128 => "CODE128",
            Self::Ean13 => "EAN13",
            Self::Upc => "UPC",
            Self::Ean8 => "EAN8",
            Self::Qr => "QR",
        }
    }

    /// Linear (1D) symbologies render to PNG; QR renders to SVG.
    pub fn is_linear(&self) -> bool {
        !matches!(self, Self::Qr)
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Symbology {
    type Err = LabelwerkError;

    /// Case-insensitive. `GENERAL` is a legacy alias for CODE128.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CODE128" | "GENERAL" => Ok(Self::Code128),
            "EAN13" => Ok(Self::Ean13),
            "UPC" => Ok(Self::Upc),
            "EAN8" => Ok(Self::Ean8),
            "QR" => Ok(Self::Qr),
            _ => Err(LabelwerkError::UnknownSymbology(s.to_owned())),
        }
    }
}

/// Payload format of a generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArtifactFormat {
    Png,
    Svg,
}

impl ArtifactFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Svg => "image/svg+xml",
        }
    }

    /// File extension used when the artifact is saved.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }

    fn data_uri_prefix(&self) -> &'static str {
        match self {
            Self::Png => GeneratedArtifact::PNG_PREFIX,
            Self::Svg => GeneratedArtifact::SVG_PREFIX,
        }
    }
}

/// A rendered symbol, held as a self-describing base64 data URI.
///
/// Artifacts do not remember the text they encode; callers pair them with
/// their inputs by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeneratedArtifact {
    /// Raster image, `data:image/png;base64,...`.
    Png(String),
    /// Vector image, `data:image/svg+xml;base64,...`.
    Svg(String),
}

impl GeneratedArtifact {
    pub const PNG_PREFIX: &'static str = "data:image/png;base64,";
    pub const SVG_PREFIX: &'static str = "data:image/svg+xml;base64,";

    /// Wrap encoded PNG bytes.
    pub fn from_png_bytes(bytes: &[u8]) -> Self {
        Self::Png(format!("{}{}", Self::PNG_PREFIX, STANDARD.encode(bytes)))
    }

    /// Wrap serialized SVG markup.
    pub fn from_svg_markup(markup: &str) -> Self {
        Self::Svg(format!("{}{}", Self::SVG_PREFIX, STANDARD.encode(markup)))
    }

    /// Classify an existing data URI by its prefix.
    pub fn from_data_uri(uri: impl Into<String>) -> Result<Self> {
        let uri = uri.into();
        if uri.starts_with(Self::PNG_PREFIX) {
            Ok(Self::Png(uri))
        } else if uri.starts_with(Self::SVG_PREFIX) {
            Ok(Self::Svg(uri))
        } else {
            let shown: String = uri.chars().take(32).collect();
            Err(LabelwerkError::InvalidArtifact(format!(
                "unrecognised data URI prefix: {shown}"
            )))
        }
    }

    pub fn data_uri(&self) -> &str {
        match self {
            Self::Png(uri) | Self::Svg(uri) => uri,
        }
    }

    pub fn format(&self) -> ArtifactFormat {
        match self {
            Self::Png(_) => ArtifactFormat::Png,
            Self::Svg(_) => ArtifactFormat::Svg,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        self.format().mime_type()
    }

    pub fn file_extension(&self) -> &'static str {
        self.format().extension()
    }

    /// Decode the base64 payload back into file bytes.
    pub fn decode_payload(&self) -> Result<Vec<u8>> {
        let prefix = self.format().data_uri_prefix();
        let encoded = self.data_uri().strip_prefix(prefix).ok_or_else(|| {
            LabelwerkError::InvalidArtifact(format!("missing {prefix} prefix"))
        })?;
        STANDARD
            .decode(encoded)
            .map_err(|err| LabelwerkError::InvalidArtifact(format!("bad base64 payload: {err}")))
    }
}

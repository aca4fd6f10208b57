// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Label-sheet templates: the preset catalog, user-entered custom sheets, and
// the resolved record the layout engine consumes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LabelwerkError, Result};

/// Unit of a physical [`Length`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    In,
    Mm,
    Cm,
    Pt,
    Px,
}

impl LengthUnit {
    /// CSS unit suffix.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Mm => "mm",
            Self::Cm => "cm",
            Self::Pt => "pt",
            Self::Px => "px",
        }
    }

    /// Millimetres per one unit (CSS reference: 96px = 72pt = 1in).
    fn mm_per_unit(&self) -> f64 {
        match self {
            Self::In => 25.4,
            Self::Mm => 1.0,
            Self::Cm => 10.0,
            Self::Pt => 25.4 / 72.0,
            Self::Px => 25.4 / 96.0,
        }
    }
}

/// A positive physical length, rendered as a CSS length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub const fn inches(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::In,
        }
    }

    pub fn to_mm(&self) -> f64 {
        self.value * self.unit.mm_per_unit()
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

impl FromStr for Length {
    type Err = LabelwerkError;

    /// Parses `1.5in`, `38.1 mm`, `2cm`... A bare number is taken as inches.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();

        let units = [
            LengthUnit::In,
            LengthUnit::Mm,
            LengthUnit::Cm,
            LengthUnit::Pt,
            LengthUnit::Px,
        ];
        let (number, unit) = units
            .iter()
            .find_map(|unit| {
                lower
                    .strip_suffix(unit.suffix())
                    .map(|rest| (rest.trim_end(), *unit))
            })
            .unwrap_or((lower.as_str(), LengthUnit::In));

        let value: f64 = number
            .parse()
            .map_err(|_| LabelwerkError::InvalidDimension(format!("not a length: {trimmed:?}")))?;
        if !value.is_finite() || value <= 0.0 {
            return Err(LabelwerkError::InvalidDimension(format!(
                "length must be positive: {trimmed:?}"
            )));
        }
        Ok(Self { value, unit })
    }
}

/// Fixed sheet presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SheetPreset {
    /// 38.1 x 21.2 mm labels.
    #[serde(rename = "a4-65")]
    A4Labels65,
    /// 63.5 x 38.1 mm labels.
    #[serde(rename = "a4-21")]
    A4Labels21,
    /// 99.1 x 57 mm labels.
    #[serde(rename = "a4-10")]
    A4Labels10,
    /// One 210 x 297 mm label.
    #[serde(rename = "a4-full")]
    A4FullPage,
}

impl SheetPreset {
    pub const ALL: [SheetPreset; 4] = [
        Self::A4Labels65,
        Self::A4Labels21,
        Self::A4Labels10,
        Self::A4FullPage,
    ];

    /// Display name shown in the catalog.
    pub fn name(&self) -> &'static str {
        match self {
            Self::A4Labels65 => "A4 65-label",
            Self::A4Labels21 => "A4 21-label",
            Self::A4Labels10 => "A4 10-label",
            Self::A4FullPage => "A4 full-page",
        }
    }

    /// Short identifier accepted on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::A4Labels65 => "a4-65",
            Self::A4Labels21 => "a4-21",
            Self::A4Labels10 => "a4-10",
            Self::A4FullPage => "a4-full",
        }
    }

    pub fn spec(&self) -> SheetSpec {
        let (width, height, columns, rows) = match self {
            Self::A4Labels65 => (1.5, 0.83, 3, 11),
            Self::A4Labels21 => (2.5, 1.5, 3, 7),
            Self::A4Labels10 => (3.9, 2.25, 2, 5),
            Self::A4FullPage => (8.27, 11.7, 1, 1),
        };
        SheetSpec::new(
            self.name(),
            Length::inches(width),
            Length::inches(height),
            columns,
            rows,
        )
    }
}

impl FromStr for SheetPreset {
    type Err = LabelwerkError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|preset| {
                preset.slug().eq_ignore_ascii_case(wanted) || preset.name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| LabelwerkError::UnknownSheet(wanted.to_owned()))
    }
}

/// A sheet described by the four free-form custom fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomSheet {
    pub width: Length,
    pub height: Length,
    pub columns: u32,
    pub rows: u32,
}

impl CustomSheet {
    /// Build from raw form text.
    ///
    /// `columns`/`rows` never fail: anything that is not a positive integer
    /// becomes 1. Width and height must be valid lengths.
    pub fn from_fields(width: &str, height: &str, columns: &str, rows: &str) -> Result<Self> {
        Ok(Self {
            width: width.parse()?,
            height: height.parse()?,
            columns: parse_count(columns),
            rows: parse_count(rows),
        })
    }
}

/// Parse a grid count from user text, coercing junk and non-positive values to 1.
pub fn parse_count(raw: &str) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(n) if n >= 1 => u32::try_from(n).unwrap_or(u32::MAX),
        _ => 1,
    }
}

/// The sheet the user has selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SheetTemplate {
    Preset(SheetPreset),
    Custom(CustomSheet),
}

impl SheetTemplate {
    pub fn name(&self) -> &str {
        match self {
            Self::Preset(preset) => preset.name(),
            Self::Custom(_) => "Custom",
        }
    }

    /// Resolve to the concrete record used for layout.
    pub fn resolve(&self) -> SheetSpec {
        match self {
            Self::Preset(preset) => preset.spec(),
            Self::Custom(custom) => SheetSpec::new(
                "Custom",
                custom.width,
                custom.height,
                custom.columns,
                custom.rows,
            ),
        }
    }
}

impl Default for SheetTemplate {
    fn default() -> Self {
        Self::Preset(SheetPreset::A4Labels65)
    }
}

/// Concrete sheet geometry. `columns` and `rows` are always at least 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetSpec {
    pub name: String,
    /// Width of one label cell.
    pub width: Length,
    /// Height of one label cell.
    pub height: Length,
    pub columns: u32,
    /// Informational only; layout flows rows from the item count.
    pub rows: u32,
}

impl SheetSpec {
    pub fn new(
        name: impl Into<String>,
        width: Length,
        height: Length,
        columns: u32,
        rows: u32,
    ) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            columns: columns.max(1),
            rows: rows.max(1),
        }
    }

    /// Labels that fit on one physical sheet.
    pub fn labels_per_sheet(&self) -> u32 {
        self.columns.saturating_mul(self.rows)
    }
}

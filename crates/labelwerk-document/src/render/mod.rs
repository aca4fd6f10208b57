// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Render module — PNG for linear symbologies, SVG for QR.

pub mod raster;
pub mod vector;

pub use raster::BarcodeCanvas;
pub use vector::qr_svg;

use labelwerk_core::error::Result;
use labelwerk_core::{GeneratedArtifact, RenderOptions, Symbology};

use crate::symbology::encode_linear;

/// Render one artifact synchronously.
///
/// QR text becomes an SVG data URI; everything else goes through the linear
/// encoder for `symbology` and becomes a PNG data URI. Encoder rejections are
/// returned as-is, never replaced by another format.
pub fn render_artifact(
    text: &str,
    symbology: Symbology,
    options: &RenderOptions,
) -> Result<GeneratedArtifact> {
    if symbology.is_linear() {
        let symbol = encode_linear(text, symbology)?;
        let png = BarcodeCanvas::render(&symbol, options)?.to_png_bytes()?;
        Ok(GeneratedArtifact::from_png_bytes(&png))
    } else {
        let markup = qr_svg(text, options.qr_size)?;
        Ok(GeneratedArtifact::from_svg_markup(&markup))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_symbology_kind() {
        let options = RenderOptions::default();
        for symbology in Symbology::ALL {
            let text = match symbology {
                Symbology::Ean13 => "4221735075026",
                Symbology::Upc => "036000291452",
                Symbology::Ean8 => "96385074",
                _ => "ABC123",
            };
            let artifact = render_artifact(text, symbology, &options).unwrap();
            let expected = if symbology.is_linear() { "png" } else { "svg" };
            assert_eq!(artifact.file_extension(), expected, "{symbology}");
        }
    }
}

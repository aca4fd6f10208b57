// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raster rendering — draw linear symbols onto an in-memory grayscale surface
// and encode it as PNG, using the `image` and `imageproc` crates.

use image::{GrayImage, ImageFormat, Luma};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use labelwerk_core::RenderOptions;
use labelwerk_core::error::LabelwerkError;
use tracing::{debug, instrument};

use crate::symbology::LinearSymbol;

const INK: Luma<u8> = Luma([0]);
const PAPER: Luma<u8> = Luma([255]);

/// Raster surface holding one rendered barcode.
///
/// ```ignore
/// let symbol = encode_linear("ABC123", Symbology::Code128)?;
/// let png = BarcodeCanvas::render(&symbol, &RenderOptions::default())?.to_png_bytes()?;
/// ```
pub struct BarcodeCanvas {
    image: GrayImage,
}

impl BarcodeCanvas {
    /// Draw `symbol` with a quiet zone on every side.
    ///
    /// Fails with [`LabelwerkError::ImageError`] when the options make the
    /// surface too large to address.
    #[instrument(skip_all, fields(symbology = %symbol.symbology, modules = symbol.module_count()))]
    pub fn render(symbol: &LinearSymbol, options: &RenderOptions) -> Result<Self, LabelwerkError> {
        let module = options.module_width.max(1);
        let bar_height = options.bar_height.max(1);
        let quiet = options.quiet_zone;

        let margins = quiet.checked_mul(2);
        let width = symbol
            .module_count()
            .checked_mul(module)
            .zip(margins)
            .and_then(|(bars, margins)| bars.checked_add(margins));
        let height = margins.and_then(|margins| bar_height.checked_add(margins));
        let (Some(width), Some(height)) = (width, height) else {
            return Err(LabelwerkError::ImageError(format!(
                "canvas too large for {} modules (module width {module}, bar height {bar_height}, quiet zone {quiet})",
                symbol.module_count()
            )));
        };
        // Bar rectangles are placed with i32 coordinates.
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(LabelwerkError::ImageError(format!(
                "canvas {width}x{height} exceeds the drawable range"
            )));
        }

        let mut image = GrayImage::from_pixel(width, height, PAPER);

        for (start, span) in symbol.bars() {
            let x = quiet + start * module;
            let rect = Rect::at(x as i32, quiet as i32).of_size(span * module, bar_height);
            draw_filled_rect_mut(&mut image, rect, INK);
        }

        debug!(width, height, "Barcode drawn");
        Ok(Self { image })
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Borrow the underlying pixels.
    pub fn as_gray(&self) -> &GrayImage {
        &self.image
    }

    // -- Output ---------------------------------------------------------------

    /// Encode the surface as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, LabelwerkError> {
        encode_to_format(&self.image, ImageFormat::Png)
    }
}

/// Encode a grayscale image into the specified format, returning the raw bytes.
fn encode_to_format(image: &GrayImage, format: ImageFormat) -> Result<Vec<u8>, LabelwerkError> {
    let mut buffer = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buffer);
    image
        .write_to(&mut cursor, format)
        .map_err(|err| LabelwerkError::ImageError(format!("{format:?} encoding failed: {err}")))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbology::encode_linear;
    use labelwerk_core::Symbology;

    #[test]
    fn canvas_size_follows_options() {
        let symbol = encode_linear("96385074", Symbology::Ean8).unwrap();
        let options = RenderOptions::default();
        let canvas = BarcodeCanvas::render(&symbol, &options).unwrap();
        assert_eq!(canvas.width(), 67 * 2 + 20);
        assert_eq!(canvas.height(), 100 + 20);
    }

    #[test]
    fn bars_are_ink_and_quiet_zone_is_paper() {
        let symbol = encode_linear("96385074", Symbology::Ean8).unwrap();
        let canvas = BarcodeCanvas::render(&symbol, &RenderOptions::default()).unwrap();
        let pixels = canvas.as_gray();
        // Left edge guard starts right after the quiet zone.
        assert_eq!(*pixels.get_pixel(10, 60), INK);
        assert_eq!(*pixels.get_pixel(5, 60), PAPER);
        // Second guard module is a space.
        assert_eq!(*pixels.get_pixel(12, 60), PAPER);
        // Above the bars is quiet zone.
        assert_eq!(*pixels.get_pixel(10, 5), PAPER);
    }

    #[test]
    fn oversized_options_are_rejected() {
        let symbol = encode_linear("96385074", Symbology::Ean8).unwrap();
        let wide = RenderOptions {
            module_width: u32::MAX / 2,
            ..RenderOptions::default()
        };
        assert!(matches!(
            BarcodeCanvas::render(&symbol, &wide),
            Err(LabelwerkError::ImageError(_))
        ));

        let padded = RenderOptions {
            quiet_zone: u32::MAX,
            ..RenderOptions::default()
        };
        assert!(matches!(
            BarcodeCanvas::render(&symbol, &padded),
            Err(LabelwerkError::ImageError(_))
        ));

        let tall = RenderOptions {
            bar_height: u32::MAX - 5,
            ..RenderOptions::default()
        };
        assert!(matches!(
            BarcodeCanvas::render(&symbol, &tall),
            Err(LabelwerkError::ImageError(_))
        ));
    }

    #[test]
    fn png_round_trips_through_image_crate() {
        let symbol = encode_linear("ABC123", Symbology::Code128).unwrap();
        let canvas = BarcodeCanvas::render(&symbol, &RenderOptions::default()).unwrap();
        let png = canvas.to_png_bytes().unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), canvas.width());
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Vector rendering — QR codes as SVG markup.

use labelwerk_core::error::{LabelwerkError, Result};
use qrcodegen::{QrCode, QrCodeEcc};
use tracing::{debug, instrument};

/// Encode `text` as a QR code (error correction level L).
pub fn encode_qr(text: &str) -> Result<QrCode> {
    QrCode::encode_text(text, QrCodeEcc::Low)
        .map_err(|err| LabelwerkError::QrCapacity(format!("{err} ({} bytes)", text.len())))
}

/// Render `text` as an SVG QR code drawn at `size` x `size` user units.
///
/// The viewBox spans exactly the module grid, so the symbol scales to `size`
/// without a margin. Dark modules are merged into horizontal runs and drawn as
/// one path.
#[instrument(skip(text), fields(text_len = text.len()))]
pub fn qr_svg(text: &str, size: u32) -> Result<String> {
    let qr = encode_qr(text)?;
    let modules = qr.size();

    let mut svg = String::new();
    svg += &format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" height=\"{size}\" width=\"{size}\" \
         viewBox=\"0 0 {modules} {modules}\" shape-rendering=\"crispEdges\">"
    );
    svg += &format!("<path fill=\"#FFFFFF\" d=\"M0,0 h{modules}v{modules}H0z\"/>");
    svg.push_str("<path fill=\"#000000\" d=\"");
    svg.push_str(&dark_module_path(&qr));
    svg.push_str("\"/></svg>");

    debug!(
        version = qr.version().value(),
        modules,
        svg_len = svg.len(),
        "QR rendered"
    );
    Ok(svg)
}

/// Path data covering every dark module, one sub-path per horizontal run.
fn dark_module_path(qr: &QrCode) -> String {
    let size = qr.size();
    let mut path = String::new();
    for y in 0..size {
        let mut x = 0;
        while x < size {
            if !qr.get_module(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            while x < size && qr.get_module(x, y) {
                x += 1;
            }
            path += &format!("M{start} {y}h{}v1H{start}z", x - start);
        }
    }
    path
}

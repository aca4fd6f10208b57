// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Symbology detection — classify raw input text into the symbology it should
// be rendered with.

use labelwerk_core::Symbology;

/// Pick a symbology for `input`. Total: every string maps to something.
///
/// Rules are checked in order and the first match wins, because the later
/// classes are supersets of the earlier ones:
///
/// 1. 13 digits → EAN13
/// 2. 12 digits → UPC
/// 3. 8 digits → EAN8
/// 4. one or more of `A-Z0-9` → CODE128 (digits included, so other digit
///    lengths land here rather than in QR)
/// 5. anything else, including the empty string → QR
pub fn detect(input: &str) -> Symbology {
    let bytes = input.as_bytes();
    let all_digits = !bytes.is_empty() && bytes.iter().all(u8::is_ascii_digit);

    if all_digits {
        match bytes.len() {
            13 => return Symbology::Ean13,
            12 => return Symbology::Upc,
            8 => return Symbology::Ean8,
            _ => {}
        }
    }

    let upper_alphanumeric = !bytes.is_empty()
        && bytes
            .iter()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
    if upper_alphanumeric {
        Symbology::Code128
    } else {
        Symbology::Qr
    }
}

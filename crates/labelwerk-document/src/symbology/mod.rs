// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Linear symbology encoders — turn text into bar/space run widths.

pub mod code128;
pub mod ean;

use labelwerk_core::Symbology;
use labelwerk_core::error::{LabelwerkError, Result};
use tracing::debug;

/// An encoded linear symbol.
///
/// `runs` holds alternating bar and space widths in modules, starting and
/// ending with a bar. Quiet zones are not included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearSymbol {
    pub symbology: Symbology,
    /// The text actually encoded (retail codes gain their check digit).
    pub text: String,
    pub runs: Vec<u8>,
}

impl LinearSymbol {
    /// Total symbol width in modules.
    pub fn module_count(&self) -> u32 {
        self.runs.iter().map(|&w| u32::from(w)).sum()
    }

    /// Iterate `(start_module, width)` of every bar.
    pub fn bars(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let mut offset = 0u32;
        self.runs.iter().enumerate().filter_map(move |(i, &w)| {
            let start = offset;
            offset += u32::from(w);
            (i % 2 == 0).then_some((start, u32::from(w)))
        })
    }
}

/// Encode `text` with the linear encoder for `symbology`.
///
/// QR is not linear and is rejected here; it goes through the vector path.
pub fn encode_linear(text: &str, symbology: Symbology) -> Result<LinearSymbol> {
    let symbol = match symbology {
        Symbology::Code128 => code128::encode(text)?,
        Symbology::Ean13 => ean::encode_ean13(text)?,
        Symbology::Upc => ean::encode_upc_a(text)?,
        Symbology::Ean8 => ean::encode_ean8(text)?,
        Symbology::Qr => {
            return Err(LabelwerkError::encoding(
                symbology,
                "QR is a matrix symbology, not a linear one",
            ));
        }
    };
    debug!(
        symbology = %symbol.symbology,
        modules = symbol.module_count(),
        "Linear symbol encoded"
    );
    Ok(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_skip_spaces() {
        let symbol = LinearSymbol {
            symbology: Symbology::Code128,
            text: String::new(),
            runs: vec![2, 1, 3],
        };
        assert_eq!(symbol.module_count(), 6);
        assert_eq!(symbol.bars().collect::<Vec<_>>(), vec![(0, 2), (3, 3)]);
    }

    #[test]
    fn qr_is_not_linear() {
        let err = encode_linear("hello", Symbology::Qr).unwrap_err();
        assert!(matches!(err, LabelwerkError::Encoding { symbology: Symbology::Qr, .. }));
    }
}

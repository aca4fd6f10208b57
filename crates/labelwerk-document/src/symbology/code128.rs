// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Code 128 encoder with automatic code-set selection.
//
// Set C packs digit pairs, set B covers printable ASCII, set A covers control
// characters. Runs of four or more digits switch to set C; control characters
// switch to A and lower-case letters switch back to B.

use labelwerk_core::Symbology;
use labelwerk_core::error::{LabelwerkError, Result};

use super::LinearSymbol;

/// Bar/space widths for symbol values 0..=105, six runs each summing to 11.
const PATTERNS: [&str; 106] = [
    "212222", "222122", "222221", "121223", "121322", "131222", "122213", "122312", "132212",
    "221213", "221312", "231212", "112232", "122132", "122231", "113222", "123122", "123221",
    "223211", "221132", "221231", "213212", "223112", "312131", "311222", "321122", "321221",
    "312212", "322112", "322211", "212123", "212321", "232121", "111323", "131123", "131321",
    "112313", "132113", "132311", "211313", "231113", "231311", "112133", "112331", "132131",
    "113123", "113321", "133121", "313121", "211331", "231131", "213113", "213311", "213131",
    "311123", "311321", "331121", "312113", "312311", "332111", "314111", "221411", "431111",
    "111224", "111422", "121124", "121421", "141122", "141221", "112214", "112412", "122114",
    "122411", "142112", "142211", "241211", "221114", "413111", "241112", "134111", "111242",
    "121142", "121241", "114212", "124112", "124211", "411212", "421112", "421211", "212141",
    "214121", "412121", "111143", "111341", "131141", "114113", "114311", "411113", "411311",
    "113141", "114131", "311141", "411131", "211412", "211214", "211232",
];

/// STOP pattern (seven runs, sum 13).
const STOP: [u8; 7] = [2, 3, 3, 1, 1, 1, 2];

const CODE_C: u8 = 99;
const CODE_B: u8 = 100;
const CODE_A: u8 = 101;
const START_A: u8 = 103;
const START_B: u8 = 104;
const START_C: u8 = 105;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CodeSet {
    A,
    B,
    C,
}

impl CodeSet {
    fn start_value(self) -> u8 {
        match self {
            Self::A => START_A,
            Self::B => START_B,
            Self::C => START_C,
        }
    }

    fn switch_value(self) -> u8 {
        match self {
            Self::A => CODE_A,
            Self::B => CODE_B,
            Self::C => CODE_C,
        }
    }

    /// Whether a single ASCII byte can be written in this set.
    fn fits(self, byte: u8) -> bool {
        match self {
            Self::A => byte < 96,
            Self::B => byte >= 32,
            Self::C => false,
        }
    }

    fn value_of(self, byte: u8) -> u8 {
        match self {
            Self::A if byte < 32 => byte + 64,
            _ => byte - 32,
        }
    }
}

/// Encode ASCII text as a Code 128 symbol.
pub fn encode(text: &str) -> Result<LinearSymbol> {
    if text.is_empty() {
        return Err(LabelwerkError::encoding(
            Symbology::Code128,
            "nothing to encode",
        ));
    }
    if let Some(ch) = text.chars().find(|c| !c.is_ascii()) {
        return Err(LabelwerkError::encoding(
            Symbology::Code128,
            format!("character {ch:?} is outside ASCII"),
        ));
    }

    let mut values = symbol_values(text.as_bytes());
    values.push(checksum(&values));

    let mut runs = Vec::with_capacity(values.len() * 6 + STOP.len());
    for &value in &values {
        runs.extend(PATTERNS[usize::from(value)].bytes().map(|b| b - b'0'));
    }
    runs.extend_from_slice(&STOP);

    Ok(LinearSymbol {
        symbology: Symbology::Code128,
        text: text.to_owned(),
        runs,
    })
}

/// Start symbol plus data values, without the check symbol.
fn symbol_values(bytes: &[u8]) -> Vec<u8> {
    let mut set = initial_set(bytes);
    let mut values = Vec::with_capacity(bytes.len() + 4);
    values.push(set.start_value());

    let mut i = 0;
    while i < bytes.len() {
        if set == CodeSet::C {
            if digit_run(&bytes[i..]) >= 2 {
                values.push((bytes[i] - b'0') * 10 + (bytes[i + 1] - b'0'));
                i += 2;
            } else {
                set = alpha_set_for(&bytes[i..]);
                values.push(set.switch_value());
            }
            continue;
        }

        let run = digit_run(&bytes[i..]);
        if run >= 4 {
            // An odd run keeps its first digit in the current set.
            if run % 2 == 1 {
                values.push(set.value_of(bytes[i]));
                i += 1;
            }
            set = CodeSet::C;
            values.push(CODE_C);
            continue;
        }

        let byte = bytes[i];
        if !set.fits(byte) {
            set = if set == CodeSet::A { CodeSet::B } else { CodeSet::A };
            values.push(set.switch_value());
        }
        values.push(set.value_of(byte));
        i += 1;
    }
    values
}

fn initial_set(bytes: &[u8]) -> CodeSet {
    let run = digit_run(bytes);
    if run >= 4 || (run == bytes.len() && run % 2 == 0) {
        CodeSet::C
    } else {
        alpha_set_for(bytes)
    }
}

/// A if a control character comes before any lower-case letter, else B.
fn alpha_set_for(bytes: &[u8]) -> CodeSet {
    match bytes.iter().find(|&&b| b < 32 || b >= 96) {
        Some(&b) if b < 32 => CodeSet::A,
        _ => CodeSet::B,
    }
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Mod-103 check: start value weighted 1, then position-weighted data values.
fn checksum(values: &[u8]) -> u8 {
    let sum = values.iter().enumerate().fold(0u32, |sum, (i, &v)| {
        let weight = (i.max(1) % 103) as u32;
        (sum + u32::from(v) * weight) % 103
    });
    sum as u8
}

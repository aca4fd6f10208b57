// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// EAN-13, UPC-A and EAN-8 encoders.
//
// Each accepts the data digits alone (check digit computed and appended) or
// the full code, in which case the check digit must be correct.

use labelwerk_core::Symbology;
use labelwerk_core::error::{LabelwerkError, Result};

use super::LinearSymbol;

/// L-code digit widths (space, bar, space, bar), seven modules each.
const L_PATTERNS: [[u8; 4]; 10] = [
    [3, 2, 1, 1],
    [2, 2, 2, 1],
    [2, 1, 2, 2],
    [1, 4, 1, 1],
    [1, 1, 3, 2],
    [1, 2, 3, 1],
    [1, 1, 1, 4],
    [1, 3, 1, 2],
    [1, 2, 1, 3],
    [3, 1, 1, 2],
];

/// G-code widths: L mirrored.
const G_PATTERNS: [[u8; 4]; 10] = [
    [1, 1, 2, 3],
    [1, 2, 2, 2],
    [2, 2, 1, 2],
    [1, 1, 4, 1],
    [2, 3, 1, 1],
    [1, 3, 2, 1],
    [4, 1, 1, 1],
    [2, 1, 3, 1],
    [3, 1, 2, 1],
    [2, 1, 1, 3],
];

/// R-code (bar, space, bar, space) shares the L widths.
const R_PATTERNS: [[u8; 4]; 10] = L_PATTERNS;

/// EAN-13 left-half parity chosen by the leading digit. `true` = G-code.
const FIRST_DIGIT_PARITY: [[bool; 6]; 10] = [
    [false, false, false, false, false, false],
    [false, false, true, false, true, true],
    [false, false, true, true, false, true],
    [false, false, true, true, true, false],
    [false, true, false, false, true, true],
    [false, true, true, false, false, true],
    [false, true, true, true, false, false],
    [false, true, false, true, false, true],
    [false, true, false, true, true, false],
    [false, true, true, false, true, false],
];

const EDGE_GUARD: [u8; 3] = [1, 1, 1];
const CENTER_GUARD: [u8; 5] = [1, 1, 1, 1, 1];

/// Encode an EAN-13 from 12 or 13 digits.
pub fn encode_ean13(text: &str) -> Result<LinearSymbol> {
    let digits = complete_digits(text, Symbology::Ean13, 12)?;
    let parity = FIRST_DIGIT_PARITY[usize::from(digits[0])];

    let mut runs = Vec::with_capacity(3 + 6 * 4 + 5 + 6 * 4 + 3);
    runs.extend_from_slice(&EDGE_GUARD);
    for (&digit, &use_g) in digits[1..7].iter().zip(parity.iter()) {
        let table = if use_g { &G_PATTERNS } else { &L_PATTERNS };
        runs.extend_from_slice(&table[usize::from(digit)]);
    }
    runs.extend_from_slice(&CENTER_GUARD);
    push_right_half(&mut runs, &digits[7..]);
    runs.extend_from_slice(&EDGE_GUARD);

    Ok(symbol(Symbology::Ean13, &digits, runs))
}

/// Encode a UPC-A from 11 or 12 digits.
pub fn encode_upc_a(text: &str) -> Result<LinearSymbol> {
    let digits = complete_digits(text, Symbology::Upc, 11)?;
    Ok(symbol(Symbology::Upc, &digits, split_runs(&digits)))
}

/// Encode an EAN-8 from 7 or 8 digits.
pub fn encode_ean8(text: &str) -> Result<LinearSymbol> {
    let digits = complete_digits(text, Symbology::Ean8, 7)?;
    Ok(symbol(Symbology::Ean8, &digits, split_runs(&digits)))
}

/// GS1 check digit: weights 3,1,3,... counted from the rightmost data digit.
pub fn check_digit(data: &[u8]) -> u8 {
    let sum: u32 = data
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * if i % 2 == 0 { 3 } else { 1 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Validate digit-only input of `data_len` or `data_len + 1` digits and return
/// the full code including its check digit.
fn complete_digits(text: &str, symbology: Symbology, data_len: usize) -> Result<Vec<u8>> {
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LabelwerkError::encoding(symbology, "only digits are allowed"));
    }
    let mut digits: Vec<u8> = text.bytes().map(|b| b - b'0').collect();

    if digits.len() == data_len {
        digits.push(check_digit(&digits));
        Ok(digits)
    } else if digits.len() == data_len + 1 {
        let expected = check_digit(&digits[..data_len]);
        let actual = digits[data_len];
        if expected == actual {
            Ok(digits)
        } else {
            Err(LabelwerkError::encoding(
                symbology,
                format!("check digit should be {expected}, not {actual}"),
            ))
        }
    } else {
        Err(LabelwerkError::encoding(
            symbology,
            format!(
                "expected {} or {} digits, got {}",
                data_len,
                data_len + 1,
                digits.len()
            ),
        ))
    }
}

/// Guard, L-coded left half, centre guard, R-coded right half, guard.
fn split_runs(digits: &[u8]) -> Vec<u8> {
    let (left, right) = digits.split_at(digits.len() / 2);
    let mut runs = Vec::with_capacity(3 + left.len() * 4 + 5 + right.len() * 4 + 3);
    runs.extend_from_slice(&EDGE_GUARD);
    for &digit in left {
        runs.extend_from_slice(&L_PATTERNS[usize::from(digit)]);
    }
    runs.extend_from_slice(&CENTER_GUARD);
    push_right_half(&mut runs, right);
    runs.extend_from_slice(&EDGE_GUARD);
    runs
}

fn push_right_half(runs: &mut Vec<u8>, digits: &[u8]) {
    for &digit in digits {
        runs.extend_from_slice(&R_PATTERNS[usize::from(digit)]);
    }
}

fn symbol(symbology: Symbology, digits: &[u8], runs: Vec<u8>) -> LinearSymbol {
    LinearSymbol {
        symbology,
        text: digits.iter().map(|d| char::from(b'0' + d)).collect(),
        runs,
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the front end.
//
// Every technical error is mapped to plain English with a clear suggestion.
// Severity drives how the front end presents the message.

use crate::error::LabelwerkError;
use crate::types::Symbology;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The user typed something the generator cannot use; they can fix it.
    InputRejected,
    /// Settings or template values need correcting.
    ActionRequired,
    /// Something went wrong inside the program; retrying may help.
    Internal,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Severity level.
    pub severity: Severity,
}

/// Convert a `LabelwerkError` into a `HumanError`.
pub fn humanize_error(err: &LabelwerkError) -> HumanError {
    match err {
        LabelwerkError::EmptyInput => HumanError {
            message: "Please enter a valid input.".into(),
            suggestion: "Type the product code you want to turn into a barcode.".into(),
            severity: Severity::InputRejected,
        },

        LabelwerkError::MalformedBulkInput => HumanError {
            message: "Please enter valid codes separated by commas.".into(),
            suggestion: "For example: 4221735075026,4637243993033,8227608335903".into(),
            severity: Severity::InputRejected,
        },

        LabelwerkError::Encoding { symbology, reason } => HumanError {
            message: "Failed to generate barcode. Please check your input and try again.".into(),
            suggestion: format!("{} ({reason})", encoding_hint(*symbology)),
            severity: Severity::InputRejected,
        },

        LabelwerkError::QrCapacity(_) => HumanError {
            message: "This text is too long for a QR code.".into(),
            suggestion: "Shorten the text, or split it across several labels.".into(),
            severity: Severity::InputRejected,
        },

        LabelwerkError::UnknownSymbology(name) => HumanError {
            message: format!("\"{name}\" is not a barcode type we know."),
            suggestion: format!(
                "Choose one of: {}.",
                Symbology::ALL.map(|s| s.name()).join(", ")
            ),
            severity: Severity::ActionRequired,
        },

        LabelwerkError::InvalidDimension(detail) => HumanError {
            message: "The label size doesn't look right.".into(),
            suggestion: format!("Enter a positive size such as 1.5in or 38mm. ({detail})"),
            severity: Severity::ActionRequired,
        },

        LabelwerkError::UnknownSheet(name) => HumanError {
            message: format!("\"{name}\" is not one of the paper types."),
            suggestion: "Run `labelwerk templates` to see the available sheets, or use custom sizes.".into(),
            severity: Severity::ActionRequired,
        },

        LabelwerkError::InvalidArtifact(_) => HumanError {
            message: "A generated image could not be read back.".into(),
            suggestion: "Generate the codes again, then retry.".into(),
            severity: Severity::Internal,
        },

        LabelwerkError::ImageError(_) | LabelwerkError::Task(_) => HumanError {
            message: "Something went wrong while drawing the code.".into(),
            suggestion: "Try again. If this keeps happening, please report it.".into(),
            severity: Severity::Internal,
        },

        LabelwerkError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "We don't have permission to write there.".into(),
                    suggestion: "Choose a different output folder, or check its permissions.".into(),
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "There was a problem reading or writing a file.".into(),
                    suggestion: "Try again. If this keeps happening, your disk may be full.".into(),
                    severity: Severity::Internal,
                }
            }
        }

        LabelwerkError::Serialization(_) => HumanError {
            message: "The settings file couldn't be read.".into(),
            suggestion: "Run `labelwerk config --init` to write fresh settings.".into(),
            severity: Severity::ActionRequired,
        },
    }
}

/// What each linear encoder expects.
fn encoding_hint(symbology: Symbology) -> &'static str {
    match symbology {
        Symbology::Ean13 => "EAN-13 needs 12 digits, or 13 digits with a correct check digit",
        Symbology::Upc => "UPC needs 11 digits, or 12 digits with a correct check digit",
        Symbology::Ean8 => "EAN-8 needs 7 digits, or 8 digits with a correct check digit",
        Symbology::Code128 => "CODE128 accepts plain ASCII text",
        Symbology::Qr => "QR accepts any text",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_rejected_input() {
        let human = humanize_error(&LabelwerkError::EmptyInput);
        assert_eq!(human.severity, Severity::InputRejected);
        assert_eq!(human.message, "Please enter a valid input.");
    }

    #[test]
    fn encoding_failure_explains_the_symbology() {
        let err = LabelwerkError::encoding(Symbology::Ean13, "expected 12 or 13 digits, got 5");
        let human = humanize_error(&err);
        assert!(human.suggestion.contains("EAN-13"));
        assert!(human.suggestion.contains("got 5"));
    }

    #[test]
    fn unknown_symbology_lists_choices() {
        let human = humanize_error(&LabelwerkError::UnknownSymbology("ITF".into()));
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(human.suggestion.contains("CODE128, EAN13, UPC, EAN8, QR"));
    }
}

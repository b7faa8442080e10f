use thiserror::Error;

/// Error returned when a hex color literal cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// The literal (without `#`) is not 6 or 8 digits long.
    #[error("color literal must be #rrggbb or #rrggbbaa, got {0} digits")]
    InvalidLength(usize),

    #[error("invalid hex digit {0:?} in color literal")]
    InvalidDigit(char),
}

//! Error types for geometry analysis and pricing
//!
//! All errors carry a bracketed code in their display string for quick
//! categorization in logs and bug reports.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: I/O errors
//! - **E2xxx**: Geometry parsing errors
//! - **E3xxx**: Configuration reference errors
//! - **E4xxx**: External collaborator errors
//!
//! Note that geometry parsing errors never reach callers of
//! [`crate::analyzer::analyze`]: they are caught at the analyzer boundary
//! and replaced by fixed fallback statistics so pricing always has valid
//! input. They are still observable through
//! [`crate::analyzer::parse_binary_stl`] for tests and diagnostics.

use std::io;
use thiserror::Error;

/// Result type for printquote operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while analyzing model files or computing quotes
#[derive(Error, Debug)]
pub enum Error {
    /// IO error occurred while reading the uploaded file
    ///
    /// **Error Code**: E1001
    #[error("[E1001] I/O error: {0}")]
    Io(#[from] io::Error),

    /// Binary STL structure error
    ///
    /// **Error Code**: E2001
    ///
    /// **Common Causes**:
    /// - Buffer shorter than the 84-byte header + count prologue
    /// - Declared triangle count of zero
    /// - Buffer truncated before the declared triangle count is reached
    #[error("[E2001] Invalid binary STL: {0}")]
    InvalidStl(String),

    /// Print configuration references a material not present in the catalog
    ///
    /// **Error Code**: E3001
    ///
    /// A configuration that went through [`crate::catalog::reconcile`]
    /// cannot produce this error.
    #[error("[E3001] Unknown material: {0}")]
    UnknownMaterial(String),

    /// Print configuration references a nozzle diameter not present in the catalog
    ///
    /// **Error Code**: E3002
    ///
    /// A configuration that went through [`crate::catalog::reconcile`]
    /// cannot produce this error.
    #[error("[E3002] Unknown nozzle diameter: {0} mm")]
    UnknownNozzle(f64),

    /// The external advice collaborator failed (network, timeout, quota)
    ///
    /// **Error Code**: E4001
    ///
    /// Returned by [`crate::advice::AdviceProvider`] implementations;
    /// [`crate::advice::printing_advice`] converts it to a fixed fallback
    /// message instead of surfacing it.
    #[error("[E4001] Advice service unavailable: {0}")]
    AdviceUnavailable(String),
}

impl Error {
    /// Create an InvalidStl error for a buffer shorter than expected
    ///
    /// # Arguments
    /// * `expected` - The number of bytes the declared structure requires
    /// * `actual` - The number of bytes actually present
    pub fn stl_truncated(expected: usize, actual: usize) -> Self {
        Error::InvalidStl(format!(
            "buffer truncated: need {} bytes, got {}",
            expected, actual
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_in_messages() {
        let io_err = Error::Io(io::Error::new(io::ErrorKind::NotFound, "test"));
        assert!(io_err.to_string().contains("[E1001]"));

        let stl_err = Error::InvalidStl("test".to_string());
        assert!(stl_err.to_string().contains("[E2001]"));

        let material_err = Error::UnknownMaterial("PLA".to_string());
        assert!(material_err.to_string().contains("[E3001]"));

        let nozzle_err = Error::UnknownNozzle(0.4);
        assert!(nozzle_err.to_string().contains("[E3002]"));

        let advice_err = Error::AdviceUnavailable("timeout".to_string());
        assert!(advice_err.to_string().contains("[E4001]"));
    }

    #[test]
    fn test_stl_truncated_helper() {
        let err = Error::stl_truncated(684, 100);
        assert!(err.to_string().contains("need 684 bytes"));
        assert!(err.to_string().contains("got 100"));
        assert!(err.to_string().contains("[E2001]"));
    }
}

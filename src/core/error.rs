//! Custom error types for the application.
//!
//! - [`StorageError`] - localStorage operations for the theme preference
//!
//! Contact form errors live next to the form logic in
//! [`crate::core::contact`].

use thiserror::Error;

/// Preference storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// localStorage not available (private mode, disabled, no window).
    #[error("localStorage not available")]
    Unavailable,
    /// Failed to save to localStorage.
    #[error("failed to save to localStorage")]
    WriteFailed,
}

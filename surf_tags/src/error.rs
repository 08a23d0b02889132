// Copyright 2025 the Surf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by tag list edits and color parsing.

/// Error type for this crate.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    /// An index did not name an item in the list.
    #[error("index {index} is out of range for a list of {len} tags")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the list at the time of the call.
        len: usize,
    },
    /// A color string was not of the form `#RRGGBB`.
    #[error("expected a color of the form #RRGGBB")]
    InvalidHexColor,
}

/// Result alias for this crate.
pub type Result<T> = core::result::Result<T, TagError>;

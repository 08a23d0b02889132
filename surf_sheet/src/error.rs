// Copyright 2025 the Surf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported when a sheet is configured with unusable extents.

/// Error returned when sheet extents cannot drive the state machine.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum SheetError {
    /// An extent or metric was NaN or infinite.
    #[error("sheet extent `{name}` is not finite: {value}")]
    NonFinite {
        /// Which extent or metric was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The rest extents are not strictly increasing.
    #[error(
        "sheet extents must satisfy 0 <= dismiss < mini < half < full, \
         got dismiss={dismiss}, mini={mini}, half={half}, full={full}"
    )]
    InvalidOrdering {
        /// Extent below which the sheet dismisses.
        dismiss: f64,
        /// Extent of the `mini` rest state.
        mini: f64,
        /// Extent of the `half` rest state.
        half: f64,
        /// Extent of the `full` rest state.
        full: f64,
    },
}

/// Result alias for sheet configuration.
pub type Result<T> = core::result::Result<T, SheetError>;

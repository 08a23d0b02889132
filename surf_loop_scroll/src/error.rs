// Copyright 2025 the Surf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported when a loop strip cannot be built.

/// Error returned by engine construction and reconfiguration.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum LoopScrollError {
    /// A looping strip needs at least one item to repeat.
    #[error("a looping strip needs at least one item")]
    EmptyList,
    /// The viewport extent was zero, negative, or not finite.
    #[error("viewport extent must be positive and finite, got {0}")]
    InvalidViewport(f64),
    /// A fixed item extent was zero, negative, or not finite.
    #[error("item extent must be positive and finite, got {0}")]
    InvalidItemExtent(f64),
    /// Item spacing was negative or not finite.
    #[error("item spacing must be non-negative and finite, got {0}")]
    InvalidSpacing(f64),
    /// An items-per-viewport count was zero, negative, or not finite.
    #[error("items per viewport must be positive and finite, got {0}")]
    InvalidItemsPerViewport(f64),
    /// The viewport would need more duplicated items per side than [`MAX_PADDING`].
    ///
    /// [`MAX_PADDING`]: crate::MAX_PADDING
    #[error("{0} padding items per side exceeds the supported maximum")]
    PaddingTooLarge(usize),
}

/// Result alias for loop strip operations.
pub type Result<T> = core::result::Result<T, LoopScrollError>;

// Copyright 2025 the Surf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar helpers shared by layout code.

/// Converts an item count to a coordinate, lossily for counts above 2^53.
#[inline]
pub(crate) fn from_usize(n: usize) -> f64 {
    n as f64
}

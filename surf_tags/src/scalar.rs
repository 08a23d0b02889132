// Copyright 2025 the Surf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar helpers shared by layout code.

/// Converts an item count to a coordinate, lossily for counts above 2^53.
#[inline]
pub(crate) fn from_usize(n: usize) -> f64 {
    n as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_counts_are_exact() {
        assert_eq!(from_usize(0), 0.0);
        assert_eq!(from_usize(19), 19.0);
        assert_eq!(from_usize(1 << 20), 1_048_576.0);
    }
}

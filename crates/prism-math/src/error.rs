// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error types for matrix inversion and generator comparison.
use thiserror::Error;

/// Errors emitted by [`Matrix4x4::try_inverse`](crate::Matrix4x4::try_inverse).
///
/// The two variants correspond to the two places the elimination can prove a
/// matrix singular; callers usually only care that inversion failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// The pivot search reached a column that had already been used as a
    /// pivot more than once.
    #[error("singular matrix: column {column} was selected as pivot more than once")]
    SingularPivotColumn {
        /// Offending column index.
        column: usize,
    },
    /// The selected pivot element was exactly zero after row permutation.
    #[error("singular matrix: zero pivot in column {column}")]
    ZeroPivot {
        /// Column of the zero pivot.
        column: usize,
    },
}

/// Errors emitted by [`Rng`](crate::Rng) stream arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RngError {
    /// Distances are only defined between generators on the same stream.
    #[error("generators are on different streams (inc {lhs:#x} vs {rhs:#x})")]
    StreamMismatch {
        /// Increment of the receiver.
        lhs: u64,
        /// Increment of the other generator.
        rhs: u64,
    },
    /// PCG streams need an odd increment; an even one can only come from
    /// restored state that was never produced by a generator.
    #[error("invalid pcg32 increment {inc:#x}: must be odd")]
    EvenIncrement {
        /// Rejected increment.
        inc: u64,
    },
}

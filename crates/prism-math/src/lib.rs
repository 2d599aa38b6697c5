// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! prism-math: linear algebra and sampling primitives.
//!
//! Two independent leaf utilities live here:
//!
//! - [`Matrix4x4`], a row-major 4×4 matrix generic over its scalar type, with
//!   Gauss-Jordan inversion using full pivoting ([`Matrix4x4::try_inverse`]).
//! - [`Rng`], a PCG32 permuted congruential generator whose output is
//!   bit-identical for identical stream selectors.
//!
//! [`Point3`], [`Vector3`] and [`Normal3`] are thin carriers used by the
//! homogeneous multiply operators on [`Matrix4x4`].
#![forbid(unsafe_code)]

mod error;
mod inverse;
mod mat4;
mod prng;
mod scalar;
mod vec3;

pub use error::{MatrixError, RngError};
pub use inverse::inverse;
pub use mat4::Matrix4x4;
pub use prng::{Rng, DEFAULT_STATE, DEFAULT_STREAM, PCG32_MULTIPLIER};
pub use scalar::{Real, Scalar};
pub use vec3::{Normal3, Point3, Vector3};

/// [`Matrix4x4`] with `f32` elements.
pub type Matrix4x4f = Matrix4x4<f32>;
/// [`Matrix4x4`] with `f64` elements.
pub type Matrix4x4d = Matrix4x4<f64>;

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::scalar::Scalar;

macro_rules! carrier3 {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name<T> {
            data: [T; 3],
        }

        impl<T: Scalar> $name<T> {
            /// Creates the value from `(x, y, z)` components.
            pub const fn new(x: T, y: T, z: T) -> Self {
                Self { data: [x, y, z] }
            }

            /// Returns the components as an array.
            pub fn to_array(self) -> [T; 3] {
                self.data
            }

            /// X component.
            pub fn x(&self) -> T {
                self.data[0]
            }

            /// Y component.
            pub fn y(&self) -> T {
                self.data[1]
            }

            /// Z component.
            pub fn z(&self) -> T {
                self.data[2]
            }
        }

        impl<T: Scalar> From<[T; 3]> for $name<T> {
            fn from(value: [T; 3]) -> Self {
                Self { data: value }
            }
        }
    };
}

carrier3! {
    /// Position in 3D space.
    ///
    /// Multiplying by a [`Matrix4x4`](crate::Matrix4x4) treats it as
    /// homogeneous `w = 1` and performs the perspective divide.
    Point3
}

carrier3! {
    /// Direction or displacement in 3D space.
    ///
    /// Multiplying by a [`Matrix4x4`](crate::Matrix4x4) uses only the upper
    /// 3×3 block, so translation is ignored.
    Vector3
}

carrier3! {
    /// Surface normal.
    ///
    /// Normals transform by the inverse-transpose of the point transform.
    /// Multiplying by a [`Matrix4x4`](crate::Matrix4x4) applies the upper 3×3
    /// block of the matrix exactly as given; the caller passes
    /// `m.try_inverse()?.transpose()` when transforming normals for `m`.
    Normal3
}

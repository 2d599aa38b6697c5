// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use prism_math::{Matrix4x4, Matrix4x4d, Matrix4x4f, Normal3, Point3, Vector3};

fn sample() -> Matrix4x4f {
    Matrix4x4::new([
        [1.0, 2.0, 3.0, 4.0],
        [5.0, 6.0, 7.0, 8.0],
        [9.0, 10.0, 11.0, 12.0],
        [13.0, 14.0, 15.0, 16.0],
    ])
}

#[test]
fn diagonal_constructor_fills_only_the_diagonal() {
    let m = Matrix4x4f::from_diagonal(3.0);
    for r in 0..4 {
        for c in 0..4 {
            let expected = if r == c { 3.0 } else { 0.0 };
            assert_eq!(m[(r, c)], expected, "({r}, {c})");
        }
    }
    assert!(Matrix4x4f::identity().is_identity());
    assert!(!m.is_identity());
}

#[test]
fn componentwise_add_sub_and_scalar_ops() {
    let a = sample();
    let b = Matrix4x4f::identity();
    let sum = a + b;
    assert_eq!(sum[(0, 0)], 2.0);
    assert_eq!(sum[(0, 1)], 2.0);
    assert_eq!(sum - b, a);
    assert_eq!((a * 2.0)[(3, 3)], 32.0);
    assert_eq!((a * 2.0) / 2.0, a);
}

#[test]
fn matrix_product_matches_hand_computation() {
    let a = sample();
    let p = a * Matrix4x4f::identity();
    assert_eq!(p, a);
    let sq = a * a;
    // Row 0 of `a` dotted with column 0 of `a`: 1*1 + 2*5 + 3*9 + 4*13.
    assert_eq!(sq[(0, 0)], 90.0);
    // Row 3 dotted with column 3: 13*4 + 14*8 + 15*12 + 16*16.
    assert_eq!(sq[(3, 3)], 600.0);
}

#[test]
fn mul_operator_matches_method() {
    let s = Matrix4x4f::scale(2.0, 3.0, 4.0);
    let t = Matrix4x4f::translation(1.0, 2.0, 3.0);
    assert_eq!(s * t, s.multiply(&t));
    assert_eq!(t * s, t.multiply(&s));
    assert_eq!(s * &t, s.multiply(&t));
}

#[test]
fn mul_assign_variants_work() {
    let lhs = sample();
    let rhs = Matrix4x4f::scale(2.0, 3.0, 4.0);
    let expected = lhs * rhs;

    let mut owned = lhs;
    owned *= rhs;
    assert_eq!(owned, expected);
    assert_ne!(owned, lhs);

    let mut borrowed = lhs;
    borrowed *= &rhs;
    assert_eq!(borrowed, expected);
}

#[test]
fn transpose_swaps_rows_and_columns() {
    let m = sample();
    let t = m.transpose();
    for r in 0..4 {
        for c in 0..4 {
            assert_eq!(t[(r, c)], m[(c, r)]);
        }
    }
    assert_eq!(t.transpose(), m);
}

#[test]
fn index_mut_writes_through() {
    let mut m = Matrix4x4d::zero();
    m[(2, 1)] = 7.5;
    assert_eq!(m.get(2, 1), Some(7.5));
    assert_eq!(m.to_rows()[2][1], 7.5);
}

#[test]
#[should_panic]
fn out_of_bounds_index_panics() {
    let m = Matrix4x4d::identity();
    let _ = m[(4, 0)];
}

#[test]
fn point_transform_applies_translation() {
    let t = Matrix4x4f::translation(5.0, -3.0, 2.0);
    let p = t * Point3::new(2.0, 4.0, -1.0);
    assert_eq!(p.to_array(), [7.0, 1.0, 1.0]);
}

#[test]
fn point_transform_divides_by_w() {
    // Last row doubles w, so every coordinate is halved after the divide.
    let m = Matrix4x4f::new([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 2.0],
    ]);
    let p = m * Point3::new(2.0, 4.0, 8.0);
    assert_eq!(p.to_array(), [1.0, 2.0, 4.0]);
}

#[test]
fn point_transform_uses_last_row_for_w() {
    // w = z, the classic perspective divide.
    let m = Matrix4x4d::new([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
    ]);
    let p = m * Point3::new(3.0, 6.0, 3.0);
    assert_eq!(p.to_array(), [1.0, 2.0, 1.0]);
}

#[test]
fn point_mapped_to_zero_w_is_not_finite() {
    let m = Matrix4x4d::new([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
    ]);
    let p = m * Point3::new(1.0, 0.0, 0.0);
    assert_eq!(p.x(), f64::INFINITY);
    assert!(p.y().is_nan() && p.z().is_nan());
}

#[test]
fn vector_transform_ignores_translation() {
    let m = Matrix4x4f::translation(10.0, 20.0, 30.0) * Matrix4x4f::scale(2.0, 3.0, 4.0);
    let v = m * Vector3::new(1.0, 1.0, 1.0);
    assert_eq!(v.to_array(), [2.0, 3.0, 4.0]);
}

#[test]
fn normal_transform_uses_the_matrix_as_given() {
    let m = Matrix4x4f::scale(2.0, 1.0, 1.0);
    let inv_t = m.try_inverse().expect("scale is invertible").transpose();
    let n = inv_t * Normal3::new(1.0, 0.0, 0.0);
    assert_eq!(n.to_array(), [0.5, 0.0, 0.0]);
    // Passing the forward matrix is the caller's choice, and is honored.
    assert_eq!((m * Normal3::new(1.0, 0.0, 0.0)).to_array(), [2.0, 0.0, 0.0]);
}

#[test]
fn from_nested_array_matches_new() {
    let rows = sample().to_rows();
    assert_eq!(Matrix4x4f::from(rows), Matrix4x4::new(rows));
}

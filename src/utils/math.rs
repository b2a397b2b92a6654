// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ucxport contributors

//! Math utilities

use nalgebra::{Matrix4, Vector3};

/// Basis change from a Z-up, -Y-forward source (Blender convention) to the
/// Y-up, -Z-forward frame Unreal's interchange pipeline expects:
/// `(x, y, z) -> (x, z, -y)`.
#[rustfmt::skip]
pub fn z_up_to_y_up() -> Matrix4<f32> {
    Matrix4::new(
        1.0,  0.0, 0.0, 0.0,
        0.0,  0.0, 1.0, 0.0,
        0.0, -1.0, 0.0, 0.0,
        0.0,  0.0, 0.0, 1.0,
    )
}

/// Check if two floats are approximately equal
pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ucxport contributors

//! Mesh geometry types

mod bbox;
mod mesh;

pub use bbox::BoundingBox;
pub use mesh::{Mesh, Triangle, Vertex};

// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ucxport contributors

//! UCX collision-mesh naming convention

mod codec;
mod organize;

pub use codec::{decode, encode, is_collider, ColliderName, UCX_PREFIX};
pub use organize::{colliders_for, next_collider_name, rename_plan, RenameStep};

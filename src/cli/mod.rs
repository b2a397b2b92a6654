// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 ucxport contributors

//! CLI subsystem

pub mod reporter;

pub use reporter::Reporter;

// Copyright 2026 Gridsnap Contributors
// SPDX-License-Identifier: Apache-2.0

//! Gridsnap library — capture LinkedIn grid puzzles into solver-ready JSON.
//!
//! This library crate exposes the core modules for integration testing.

pub mod capture;
pub mod cli;
pub mod extract;
pub mod guard;
pub mod model;
pub mod puzzle;
pub mod renderer;
pub mod sink;

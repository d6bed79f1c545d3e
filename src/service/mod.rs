// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The string operations and the default [`StringService`] built on them.
//!
//! Each operation lives in its own module under [`operations`] as a plain
//! function; [`BasicStringService`] binds them to the trait and carries the
//! one piece of policy the operations need.
//!
//! [`StringService`]: crate::traits::StringService

pub mod basic;
pub mod operations;

pub use basic::BasicStringService;
pub use operations::TruncatePolicy;

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod count;
pub mod reverse;
pub mod truncate;
pub mod uppercase;

pub use count::count;
pub use reverse::reverse;
pub use truncate::{truncate, TruncatePolicy};
pub use uppercase::uppercase;

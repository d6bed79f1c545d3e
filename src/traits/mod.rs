// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod endpoint;
pub mod string_service;

pub use endpoint::Endpoint;
pub use string_service::StringService;

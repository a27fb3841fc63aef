// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports the rest of the crate programs against.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer (`app`, `ui`) uses the ports, never the adapters

pub mod port;

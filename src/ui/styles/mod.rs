// SPDX-License-Identifier: MPL-2.0
//! Widget styles.

pub mod button;
pub mod container;

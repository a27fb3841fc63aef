// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Errors stay until dismissed; info and warnings expire on their own
//! (see [`Severity::auto_dismiss_duration`]).

mod manager;
mod notification;
pub mod toast;

pub use manager::Manager;
pub use notification::{Notification, NotificationId, Severity};

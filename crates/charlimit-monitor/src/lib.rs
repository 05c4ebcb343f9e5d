//! charlimit monitor - Field Limit Monitor
//!
//! Watches text-entry form controls and toggles two CSS classes as their
//! content approaches or exceeds a character limit:
//!
//! - `character-limit-warning` when the remaining characters drop to the
//!   warning threshold or below
//! - `character-limit-exceeded` when the content is longer than the limit
//!
//! At most one of the two classes is present on a field at any time;
//! exceeded takes precedence. Fields carrying a `maxlength` attribute are
//! discovered automatically at init; others can be registered through
//! [`FieldLimitMonitor::track_element`] or
//! [`FieldLimitMonitor::track_by_selector`].

mod config;
mod limit;
mod monitor;
mod styles;

pub use config::{MonitorConfig, DEFAULT_WARNING_THRESHOLD};
pub use limit::{FieldLimit, LimitState};
pub use monitor::{FieldLimitMonitor, TrackedField};
pub use styles::{EXCEEDED_CLASS, WARNING_CLASS};

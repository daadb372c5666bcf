//! Shared data models spanning the monitor layers.

pub mod alert;
pub mod quote;

pub use alert::{Alert, AlertKind};
pub use quote::Quote;

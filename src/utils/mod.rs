//! Utility functions shared across layers.
//!
//! - [`timestamp`] - Creation/update timestamps
//! - [`id`] - Path identifier parsing

pub mod id;
pub mod timestamp;

//! Timestamp helpers shared by services.

use chrono::{DateTime, SubsecRound, Utc};

/// Current UTC time truncated to millisecond precision.
///
/// A value echoed in a create response compares equal to the one read back
/// from the store.
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

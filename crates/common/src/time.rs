//! Wall-clock helpers
//!
//! Every timestamp in OpenMatch is whole seconds since the Unix epoch,
//! carried as `i64`.

use chrono::Utc;

/// Current wall-clock time as seconds since the Unix epoch.
///
/// Used for event timestamps stamped by the engine itself; order submission
/// times are caller-supplied and never pass through this function.
pub fn unix_now() -> i64 {
    Utc::now().timestamp()
}

//! Generation request validation and rate-limit arithmetic.
//!
//! The coordinator in `boilergen-api` runs these checks before any write.
//! Both are pure so the boundary conditions are unit-testable.

use serde_json::Value;

use crate::error::CoreError;

/// Default maximum generations a user may start within one window.
pub const DEFAULT_MAX_GENERATIONS: i64 = 3;
/// Default rate-limit window in hours. Sliding, measured back from "now".
pub const DEFAULT_WINDOW_HOURS: i64 = 24;

/// Validate the raw inputs of a generation request.
///
/// `stack` and `version` must contain non-whitespace text. `features` must
/// carry an actual selection: `null`, an empty object, an empty array, or an
/// empty string are all rejected.
pub fn validate_generation_input(
    stack: &str,
    version: &str,
    features: &Value,
) -> Result<(), CoreError> {
    if stack.trim().is_empty() {
        return Err(CoreError::Validation("stack must not be empty".into()));
    }
    if version.trim().is_empty() {
        return Err(CoreError::Validation("version must not be empty".into()));
    }

    let features_empty = match features {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    };
    if features_empty {
        return Err(CoreError::Validation("features must not be empty".into()));
    }

    Ok(())
}

/// Check a user's generation count against the window limit.
///
/// `recent_links` is the number of user-project links created within the
/// trailing window. At or above `max` the request is rejected; the error
/// message names both the limit and the window so the caller can surface it
/// directly.
pub fn check_rate_limit(recent_links: i64, max: i64, window_hours: i64) -> Result<(), CoreError> {
    if recent_links >= max {
        return Err(CoreError::RateLimited(format!(
            "You have reached the limit of {max} generations in the last {window_hours}h. \
             Please try again later."
        )));
    }
    Ok(())
}

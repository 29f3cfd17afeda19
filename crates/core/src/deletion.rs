//! Deletion cooldown arithmetic.
//!
//! A project may only be deleted once a full cooldown has elapsed since its
//! creation. Requests inside the cooldown are rejected with the remaining
//! wait rendered as whole hours and minutes, both floored, so a request one
//! minute early reports "0h 1m".

use chrono::Duration;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Default cooldown before a project may be deleted.
pub const DEFAULT_COOLDOWN_HOURS: i64 = 24;

/// Check whether a project created at `created_at` may be deleted at `now`.
///
/// Returns `CooldownActive` with a user-facing remaining-time message while
/// the cooldown is still running.
pub fn check_delete_cooldown(
    created_at: Timestamp,
    now: Timestamp,
    cooldown_hours: i64,
) -> Result<(), CoreError> {
    let cooldown = Duration::hours(cooldown_hours);
    let elapsed = now - created_at;

    if elapsed < cooldown {
        let remaining = cooldown - elapsed;
        return Err(CoreError::CooldownActive(format!(
            "You can delete this project in {}",
            format_remaining(remaining)
        )));
    }

    Ok(())
}

/// Render a remaining duration as `"{h}h {m}m"`, flooring both components.
fn format_remaining(remaining: Duration) -> String {
    let total_mins = remaining.num_minutes();
    format!("{}h {}m", total_mins / 60, total_mins % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    fn at(h: i64, m: i64) -> (Timestamp, Timestamp) {
        let created = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        (created, created + Duration::hours(h) + Duration::minutes(m))
    }

    #[test]
    fn rejects_one_minute_early_with_floored_message() {
        let (created, now) = at(23, 59);
        let err = check_delete_cooldown(created, now, 24).unwrap_err();
        assert_matches!(&err, CoreError::CooldownActive(msg) if msg.contains("0h 1m"));
    }

    #[test]
    fn rejects_fresh_project_with_full_wait() {
        let (created, now) = at(0, 0);
        let err = check_delete_cooldown(created, now, 24).unwrap_err();
        assert_matches!(&err, CoreError::CooldownActive(msg) if msg.contains("24h 0m"));
    }

    #[test]
    fn reports_partial_wait() {
        let (created, now) = at(20, 18);
        let err = check_delete_cooldown(created, now, 24).unwrap_err();
        assert_matches!(&err, CoreError::CooldownActive(msg) if msg.contains("3h 42m"));
    }

    #[test]
    fn allows_after_cooldown() {
        let (created, now) = at(24, 1);
        assert!(check_delete_cooldown(created, now, 24).is_ok());
    }

    #[test]
    fn allows_exactly_at_cooldown() {
        let (created, now) = at(24, 0);
        assert!(check_delete_cooldown(created, now, 24).is_ok());
    }

    #[test]
    fn honors_configured_cooldown() {
        let (created, now) = at(1, 30);
        assert!(check_delete_cooldown(created, now, 1).is_ok());
        let err = check_delete_cooldown(created, now, 2).unwrap_err();
        assert_matches!(&err, CoreError::CooldownActive(msg) if msg.contains("0h 30m"));
    }
}

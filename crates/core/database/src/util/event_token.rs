//! Time-boxed check-in codes
//!
//! A code is the RFC 4226 truncation of `HMAC-SHA256(secret, "{event_id}:{counter}")`
//! where the counter is the number of whole code windows since the unix epoch.
//! Codes are only accepted while check-in is open for the event.
use attendance_config::ApiCheckIn;
use attendance_result::Result;
use hmac::{Hmac, Mac};
use iso8601_timestamp::{Duration, Timestamp};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::Event;

type HmacSha256 = Hmac<Sha256>;

/// Index of the code window containing the given time
pub fn counter_at(now: Timestamp, step_seconds: u64) -> u64 {
    let seconds = now.assume_utc().unix_timestamp().max(0) as u64;
    seconds / step_seconds.max(1)
}

/// Derive the code for one window
fn derive(event_id: &str, secret: &str, counter: u64, digits: u32) -> Option<String> {
    let digits = digits.clamp(1, 9);

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).ok()?;
    mac.update(event_id.as_bytes());
    mac.update(b":");
    mac.update(counter.to_string().as_bytes());
    let hash = mac.finalize().into_bytes();

    let offset = (hash[hash.len() - 1] & 0x0f) as usize;
    let binary = u32::from_be_bytes([
        hash[offset] & 0x7f,
        hash[offset + 1],
        hash[offset + 2],
        hash[offset + 3],
    ]);

    Some(format!(
        "{:0width$}",
        binary % 10_u32.pow(digits),
        width = digits as usize
    ))
}

/// Issue the code for the window containing `now`
pub fn issue(event_id: &str, secret: &str, now: Timestamp, params: &ApiCheckIn) -> Result<String> {
    derive(
        event_id,
        secret,
        counter_at(now, params.step_seconds),
        params.digits,
    )
    .ok_or_else(|| create_error!(InternalError))
}

/// Whether check-in is open for an event at the given time
pub fn is_open(event: &Event, now: Timestamp, params: &ApiCheckIn) -> bool {
    let opens = event.start_date - Duration::minutes(params.early_minutes);
    let closes = event.end_date + Duration::minutes(params.late_minutes);
    opens <= now && now <= closes
}

/// Verify a submitted code for an event
///
/// Accepts the current window and up to `skew_steps` previous ones.
pub fn verify(event: &Event, submitted: &str, now: Timestamp, params: &ApiCheckIn) -> bool {
    if !is_open(event, now, params) {
        return false;
    }

    let current = counter_at(now, params.step_seconds);
    (0..=params.skew_steps)
        .filter_map(|skew| current.checked_sub(skew))
        .filter_map(|counter| derive(&event.id, &event.secret, counter, params.digits))
        .fold(false, |matched, expected| {
            bool::from(expected.as_bytes().ct_eq(submitted.as_bytes())) | matched
        })
}

#[cfg(test)]
mod tests {
    use attendance_config::ApiCheckIn;
    use iso8601_timestamp::{Duration, Timestamp};

    use super::{counter_at, issue, verify};
    use crate::{Event, EventType};

    fn params() -> ApiCheckIn {
        ApiCheckIn {
            step_seconds: 30,
            digits: 6,
            skew_steps: 1,
            early_minutes: 30,
            late_minutes: 30,
        }
    }

    fn event(id: &str, secret: &str, start: Timestamp) -> Event {
        Event {
            id: id.to_string(),
            title: "Build Night".to_string(),
            description: None,
            start_date: start,
            end_date: start + Duration::hours(2),
            all_day: false,
            event_type: EventType::Regular,
            secret: secret.to_string(),
        }
    }

    #[test]
    fn issued_code_verifies() {
        let now = Timestamp::now_utc();
        let event = event("A", "secret", now);
        let code = issue(&event.id, &event.secret, now, &params()).unwrap();

        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
        assert!(verify(&event, &code, now, &params()));
    }

    #[test]
    fn code_is_deterministic_within_a_window() {
        let now = Timestamp::now_utc();
        let a = issue("A", "secret", now, &params()).unwrap();
        let b = issue("A", "secret", now, &params()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn code_is_bound_to_event() {
        let now = Timestamp::now_utc();
        let a = event("A", "shared", now);
        let b = event("B", "shared", now);
        let code = issue(&a.id, &a.secret, now, &params()).unwrap();

        // Identical secrets still yield distinct codes
        assert_ne!(code, issue(&b.id, &b.secret, now, &params()).unwrap());
        assert!(!verify(&b, &code, now, &params()));
    }

    #[test]
    fn previous_window_is_accepted_within_skew() {
        let now = Timestamp::now_utc();
        let event = event("A", "secret", now);
        let earlier = now - Duration::seconds(30);
        let code = issue(&event.id, &event.secret, earlier, &params()).unwrap();

        assert!(verify(&event, &code, now, &params()));

        let stale = issue(&event.id, &event.secret, now - Duration::seconds(120), &params())
            .unwrap();
        assert_eq!(counter_at(now, 30) - counter_at(now - Duration::seconds(120), 30), 4);
        assert!(!verify(&event, &stale, now, &params()));
    }

    #[test]
    fn rejected_outside_check_in_window() {
        let now = Timestamp::now_utc();
        let future = event("A", "secret", now + Duration::hours(3));
        let past = event("B", "secret", now - Duration::hours(5));

        let code = issue(&future.id, &future.secret, now, &params()).unwrap();
        assert!(!verify(&future, &code, now, &params()));

        let code = issue(&past.id, &past.secret, now, &params()).unwrap();
        assert!(!verify(&past, &code, now, &params()));
    }

    #[test]
    fn opens_early_and_closes_late() {
        let now = Timestamp::now_utc();
        let upcoming = event("A", "secret", now + Duration::minutes(20));
        let code = issue(&upcoming.id, &upcoming.secret, now, &params()).unwrap();
        assert!(verify(&upcoming, &code, now, &params()));

        let finished = event("B", "secret", now - Duration::minutes(140));
        let code = issue(&finished.id, &finished.secret, now, &params()).unwrap();
        assert!(verify(&finished, &code, now, &params()));
    }

    #[test]
    fn malformed_codes_fail() {
        let now = Timestamp::now_utc();
        let event = event("A", "secret", now);

        assert!(!verify(&event, "", now, &params()));
        assert!(!verify(&event, "12345", now, &params()));
        assert!(!verify(&event, "abcdef", now, &params()));

        let code = issue(&event.id, &event.secret, now, &params()).unwrap();
        assert!(!verify(&event, &format!("{code}0"), now, &params()));
        assert!(!verify(&event, &code[..5], now, &params()));
    }
}

use crate::geopoint::{GeoPoint, KILOMETERS_PER_MILE, MILES_PER_KILOMETER};
use std::fmt;

pub const KEY_LAST_TIMESTAMP: &str = "lastTS";
pub const KEY_LAST_STATUS_CODE: &str = "lastSC";
pub const KEY_IS_DRIVING: &str = "isDriving";
pub const KEY_DISTANCE_KM: &str = "distKM";
pub const KEY_LAST_GEOPOINT: &str = "lastGP";

/// A tracked-asset event as supplied by the ingestion pipeline. Only the
/// fields the duty-log snapshot consumes are carried here.
#[derive(Debug, Clone, Copy)]
pub struct TrackedEvent {
    pub timestamp: i64,
    pub status_code: i32,
    pub geopoint: GeoPoint,
}

/// Last-known duty-log state for one tracked asset, persisted as a
/// single-line `key=value` encoding:
///
/// ```text
/// lastTS=1432734421 lastSC=0xF401 isDriving=true distKM=0.0 lastGP=37.78352/-121.22567
/// ```
///
/// `lastTS` is always written. The remaining fields are only written while
/// a status code is defined; without one the line is the `lastTS` token
/// alone. Decoding never fails: a missing or malformed token falls back to
/// the field default.
#[derive(Debug, Clone, Default)]
pub struct LogState {
    last_timestamp: i64,
    last_status_code: i32,
    is_driving: bool,
    last_distance_km: f64,
    last_geopoint: GeoPoint,
}

impl LogState {
    pub fn new(
        last_timestamp: i64,
        last_status_code: i32,
        is_driving: bool,
        distance_km: f64,
        last_geopoint: GeoPoint,
    ) -> Self {
        Self {
            last_timestamp,
            last_status_code,
            is_driving,
            last_distance_km: distance_km,
            last_geopoint,
        }
    }

    /// Parses the stored text form. Unknown keys are ignored, unparsable
    /// values fall back to the field default, blank input yields an
    /// all-default snapshot.
    pub fn decode(text: &str) -> Self {
        let mut state = Self::default();
        for token in text.split_whitespace() {
            let Some((key, value)) = token.split_once('=') else {
                continue;
            };
            match key {
                KEY_LAST_TIMESTAMP => {
                    state.last_timestamp = value.parse().unwrap_or_default();
                }
                KEY_LAST_STATUS_CODE => {
                    state.last_status_code = parse_status_code(value).unwrap_or_default();
                }
                KEY_IS_DRIVING => {
                    state.is_driving = value.parse().unwrap_or_default();
                }
                KEY_DISTANCE_KM => {
                    state.last_distance_km = value.parse().unwrap_or_default();
                }
                KEY_LAST_GEOPOINT => {
                    state.last_geopoint = value.parse().unwrap_or_default();
                }
                _ => {}
            }
        }
        state
    }

    /// Renders the stored text form. The field-omission rule mirrors what
    /// existing stored rows look like: secondary fields only appear while
    /// the status code is defined, and the geo point only when valid.
    pub fn encode(&self) -> String {
        let mut out = format!("{}={}", KEY_LAST_TIMESTAMP, self.last_timestamp);
        if self.has_last_status_code() {
            out.push_str(&format!(
                " {}=0x{:04X}",
                KEY_LAST_STATUS_CODE, self.last_status_code
            ));
            out.push_str(&format!(" {}={}", KEY_IS_DRIVING, self.is_driving));
            // {:?} keeps the trailing ".0" on integral values that stored
            // rows carry ("distKM=0.0").
            out.push_str(&format!(" {}={:?}", KEY_DISTANCE_KM, self.last_distance_km));
            if self.has_last_geopoint() {
                out.push_str(&format!(" {}={}", KEY_LAST_GEOPOINT, self.last_geopoint));
            }
        }
        out
    }

    /// Resets every field to its default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Folds a tracked event into the snapshot: timestamp, status code and
    /// geo point are overwritten. `is_driving` and the distance accumulator
    /// are owned by the duty-status logic and stay untouched.
    pub fn apply_event(&mut self, event: &TrackedEvent) {
        self.last_timestamp = event.timestamp;
        self.last_status_code = event.status_code;
        self.last_geopoint = event.geopoint;
    }

    pub fn last_timestamp(&self) -> i64 {
        self.last_timestamp
    }

    pub fn set_last_timestamp(&mut self, timestamp: i64) {
        self.last_timestamp = timestamp;
    }

    pub fn has_last_timestamp(&self) -> bool {
        self.last_timestamp > 0
    }

    pub fn last_status_code(&self) -> i32 {
        self.last_status_code
    }

    pub fn set_last_status_code(&mut self, status_code: i32) {
        self.last_status_code = status_code;
    }

    pub fn has_last_status_code(&self) -> bool {
        self.last_status_code > 0
    }

    pub fn is_driving(&self) -> bool {
        self.is_driving
    }

    pub fn set_is_driving(&mut self, is_driving: bool) {
        self.is_driving = is_driving;
    }

    pub fn last_distance_km(&self) -> f64 {
        self.last_distance_km
    }

    pub fn set_last_distance_km(&mut self, distance_km: f64) {
        self.last_distance_km = distance_km;
    }

    pub fn add_last_distance_km(&mut self, delta_km: f64) {
        self.last_distance_km += delta_km;
    }

    // Mile accessors are pure conversions over the kilometer base value;
    // there is no separate mile state.

    pub fn last_distance_mi(&self) -> f64 {
        self.last_distance_km * MILES_PER_KILOMETER
    }

    pub fn set_last_distance_mi(&mut self, distance_mi: f64) {
        self.set_last_distance_km(distance_mi * KILOMETERS_PER_MILE);
    }

    pub fn add_last_distance_mi(&mut self, delta_mi: f64) {
        self.add_last_distance_km(delta_mi * KILOMETERS_PER_MILE);
    }

    pub fn last_geopoint(&self) -> GeoPoint {
        self.last_geopoint
    }

    pub fn set_last_geopoint(&mut self, geopoint: GeoPoint) {
        self.last_geopoint = geopoint;
    }

    pub fn has_last_geopoint(&self) -> bool {
        self.last_geopoint.is_valid()
    }
}

// Equality follows the persisted form, not the raw fields: distances that
// encode to the same text compare equal.
impl PartialEq for LogState {
    fn eq(&self, other: &Self) -> bool {
        self.encode() == other.encode()
    }
}

impl fmt::Display for LogState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

// Status codes arrive as "0xF401" in stored rows but plain decimal is
// accepted too.
fn parse_status_code(value: &str) -> Option<i32> {
    if let Some(hex) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        i32::from_str_radix(hex, 16).ok()
    } else {
        value.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str =
        "lastTS=1432734421 lastSC=0xF401 isDriving=true distKM=0.0 lastGP=37.78352/-121.22567";

    #[test]
    fn test_decode_sample_row() {
        let state = LogState::decode(SAMPLE);
        assert_eq!(state.last_timestamp(), 1432734421);
        assert_eq!(state.last_status_code(), 0xF401);
        assert!(state.is_driving());
        assert_eq!(state.last_distance_km(), 0.0);
        assert!(state.has_last_geopoint());
        assert_eq!(state.last_geopoint().latitude, 37.78352);
        assert_eq!(state.last_geopoint().longitude, -121.22567);
    }

    #[test]
    fn test_encode_round_trip() {
        let state = LogState::decode(SAMPLE);
        assert_eq!(state.encode(), SAMPLE);
        assert_eq!(LogState::decode(&state.encode()).encode(), SAMPLE);
    }

    #[test]
    fn test_encode_without_status_code_is_timestamp_only() {
        let mut state = LogState::default();
        state.set_last_timestamp(1432734421);
        state.set_is_driving(true);
        state.set_last_distance_km(12.5);
        state.set_last_geopoint(GeoPoint::new(37.78352, -121.22567));
        // No status code: nothing but lastTS is written.
        assert_eq!(state.encode(), "lastTS=1432734421");
    }

    #[test]
    fn test_encode_omits_invalid_geopoint() {
        let state = LogState::new(100, 0xF010, false, 3.0, GeoPoint::default());
        assert_eq!(state.encode(), "lastTS=100 lastSC=0xF010 isDriving=false distKM=3.0");
    }

    #[test]
    fn test_status_code_hex_width() {
        let state = LogState::new(1, 0x12, false, 0.0, GeoPoint::default());
        assert_eq!(state.encode(), "lastTS=1 lastSC=0x0012 isDriving=false distKM=0.0");
    }

    #[test]
    fn test_decode_blank_matches_default() {
        assert_eq!(LogState::decode(""), LogState::default());
        assert_eq!(LogState::decode("   "), LogState::default());
        assert_eq!(LogState::default().encode(), "lastTS=0");
    }

    #[test]
    fn test_decode_tolerates_garbage() {
        let state = LogState::decode("lastTS=abc lastSC=zz bogus isDriving=maybe unknown=1");
        assert_eq!(state, LogState::default());
    }

    #[test]
    fn test_decode_accepts_decimal_status_code() {
        let state = LogState::decode("lastTS=5 lastSC=62465");
        assert_eq!(state.last_status_code(), 0xF401);
    }

    #[test]
    fn test_has_predicates_independent() {
        let mut state = LogState::default();
        assert!(!state.has_last_timestamp());
        assert!(!state.has_last_status_code());
        state.set_last_timestamp(1432734421);
        assert!(state.has_last_timestamp());
        assert!(!state.has_last_status_code());
        state.set_last_timestamp(-1);
        state.set_last_status_code(0xF401);
        assert!(!state.has_last_timestamp());
        assert!(state.has_last_status_code());
    }

    #[test]
    fn test_apply_event_leaves_duty_fields_alone() {
        let mut state = LogState::new(10, 1, true, 42.0, GeoPoint::default());
        let event = TrackedEvent {
            timestamp: 1432734421,
            status_code: 0xF401,
            geopoint: GeoPoint::new(37.78352, -121.22567),
        };
        state.apply_event(&event);
        assert_eq!(state.last_timestamp(), 1432734421);
        assert_eq!(state.last_status_code(), 0xF401);
        assert_eq!(state.last_geopoint(), event.geopoint);
        // Duty flag and distance accumulator belong to duty-status logic.
        assert!(state.is_driving());
        assert_eq!(state.last_distance_km(), 42.0);
    }

    #[test]
    fn test_distance_accumulator() {
        let mut state = LogState::default();
        state.set_last_distance_km(10.0);
        state.add_last_distance_km(5.0);
        assert_eq!(state.last_distance_km(), 15.0);
    }

    #[test]
    fn test_mile_conversions() {
        let mut state = LogState::default();
        state.set_last_distance_mi(100.0);
        assert!((state.last_distance_mi() - 100.0).abs() < 1e-6);
        assert!((state.last_distance_km() - 160.9344).abs() < 1e-9);
        state.add_last_distance_mi(50.0);
        assert!((state.last_distance_mi() - 150.0).abs() < 1e-6);
    }

    #[test]
    fn test_equality_is_over_encoded_form() {
        let a = LogState::new(100, 0, true, 1.0, GeoPoint::default());
        let b = LogState::new(100, 0, false, 2.0, GeoPoint::default());
        // Both encode to "lastTS=100"; the suppressed fields do not count.
        assert_eq!(a, b);

        let c = LogState::new(100, 0xF401, false, 1.0, GeoPoint::default());
        let d = LogState::new(100, 0xF401, false, 2.0, GeoPoint::default());
        assert_ne!(c, d);
    }

    #[test]
    fn test_clear() {
        let mut state = LogState::decode(SAMPLE);
        state.clear();
        assert_eq!(state, LogState::default());
    }

    #[test]
    fn test_display_matches_encode() {
        let state = LogState::decode(SAMPLE);
        assert_eq!(state.to_string(), state.encode());
    }
}

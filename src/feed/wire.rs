use serde_json::Value;

use crate::error::FeedError;
use crate::model::record::PriceRecord;

/// Decode one inbound text frame.
///
/// A frame that is not valid JSON is a decode error and is reported by
/// the caller. A JSON frame that fails the minimal shape check (numeric
/// `bid`, string `timestamp`) is dropped without a trace. Everything
/// else becomes a record: known optional fields are carried when their
/// type matches, unknown fields are ignored.
pub fn parse_frame(text: &str) -> Result<Option<PriceRecord>, FeedError> {
    let value: Value = serde_json::from_str(text)?;
    Ok(record_from_value(&value))
}

fn record_from_value(value: &Value) -> Option<PriceRecord> {
    let bid = value.get("bid")?.as_f64()?;
    let timestamp = value.get("timestamp")?.as_str()?.to_string();

    Some(PriceRecord {
        bid,
        ask: value.get("ask").and_then(Value::as_f64),
        will_go_up: value.get("will_go_up").and_then(Value::as_i64),
        earnings: value.get("earnings").and_then(Value::as_f64),
        operations: value.get("operations").and_then(Value::as_u64),
        accuracy: value.get("accuracy").and_then(Value::as_f64),
        timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_frame() {
        let text = r#"{
            "bid": 1.001,
            "ask": 1.002,
            "will_go_up": 1,
            "earnings": 12.301,
            "operations": 42,
            "accuracy": 0.873,
            "timestamp": "2024-05-02T09:30:00"
        }"#;

        let record = parse_frame(text)
            .expect("valid JSON")
            .expect("valid shape");
        assert!((record.bid - 1.001).abs() < f64::EPSILON);
        assert_eq!(record.ask, Some(1.002));
        assert_eq!(record.will_go_up, Some(1));
        assert_eq!(record.earnings, Some(12.301));
        assert_eq!(record.operations, Some(42));
        assert_eq!(record.accuracy, Some(0.873));
        assert_eq!(record.timestamp, "2024-05-02T09:30:00");
    }

    #[test]
    fn parses_minimal_frame_with_absent_optionals() {
        let record = parse_frame(r#"{"bid": 2.5, "timestamp": "2024-05-02T09:30:01"}"#)
            .expect("valid JSON")
            .expect("valid shape");
        assert!((record.bid - 2.5).abs() < f64::EPSILON);
        assert_eq!(record.ask, None);
        assert_eq!(record.will_go_up, None);
        assert_eq!(record.earnings, None);
        assert_eq!(record.operations, None);
        assert_eq!(record.accuracy, None);
    }

    #[test]
    fn drops_frame_with_non_numeric_bid() {
        let parsed = parse_frame(r#"{"bid": "abc", "timestamp": "2024-05-02T09:30:00"}"#)
            .expect("valid JSON");
        assert_eq!(parsed, None);
    }

    #[test]
    fn drops_frame_missing_bid() {
        let parsed = parse_frame(r#"{"ask": 1.0, "timestamp": "2024-05-02T09:30:00"}"#)
            .expect("valid JSON");
        assert_eq!(parsed, None);
    }

    #[test]
    fn drops_frame_with_non_string_timestamp() {
        let parsed = parse_frame(r#"{"bid": 1.0, "timestamp": 1714642200}"#).expect("valid JSON");
        assert_eq!(parsed, None);
    }

    #[test]
    fn drops_frame_missing_timestamp() {
        let parsed = parse_frame(r#"{"bid": 1.0}"#).expect("valid JSON");
        assert_eq!(parsed, None);
    }

    #[test]
    fn mistyped_optional_field_is_left_absent() {
        let record = parse_frame(
            r#"{"bid": 1.0, "ask": "oops", "will_go_up": "yes", "timestamp": "t"}"#,
        )
        .expect("valid JSON")
        .expect("bid and timestamp are valid");
        assert_eq!(record.ask, None);
        assert_eq!(record.will_go_up, None);
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        assert!(parse_frame("not json at all").is_err());
        assert!(parse_frame(r#"{"bid": 1.0,"#).is_err());
    }

    #[test]
    fn non_object_json_is_dropped_not_an_error() {
        assert_eq!(parse_frame("[1, 2, 3]").expect("valid JSON"), None);
        assert_eq!(parse_frame("42").expect("valid JSON"), None);
    }
}

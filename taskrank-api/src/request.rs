//! Decoding request bodies into JSON payloads.

use serde_json::{Map, Value};

use crate::RequestError;

/// Payload field carrying the task list.
pub const TASKS_FIELD: &str = "tasks";
/// Payload field carrying the analysis strategy label.
pub const STRATEGY_FIELD: &str = "strategy";

/// Decode a request body into a JSON object.
///
/// Bodies that are empty, not UTF-8, not JSON, or not a JSON object all
/// decode to an empty payload.
#[must_use]
pub fn parse_body(body: &[u8]) -> Map<String, Value> {
    let text = match std::str::from_utf8(body) {
        Ok(text) => text,
        Err(err) => {
            log::debug!("request body is not UTF-8: {err}");
            return Map::new();
        }
    };
    if text.trim().is_empty() {
        return Map::new();
    }
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(payload)) => payload,
        Ok(other) => {
            log::debug!("request body is not a JSON object; ignoring {other}");
            Map::new()
        }
        Err(err) => {
            log::debug!("request body is not valid JSON: {err}");
            Map::new()
        }
    }
}

/// The payload's task list, which must be present and an array.
pub(crate) fn required_tasks(payload: &Map<String, Value>) -> Result<&[Value], RequestError> {
    match payload.get(TASKS_FIELD) {
        Some(Value::Array(tasks)) => Ok(tasks),
        _ => Err(RequestError::TasksNotAList),
    }
}

/// The payload's task list, where absence or `null` means no tasks.
pub(crate) fn optional_tasks(payload: &Map<String, Value>) -> Result<&[Value], RequestError> {
    match payload.get(TASKS_FIELD) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(tasks)) => Ok(tasks),
        Some(_) => Err(RequestError::TasksNotAList),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case(b"".as_slice())]
    #[case(b"   \n".as_slice())]
    #[case(b"{not json".as_slice())]
    #[case(b"[1, 2, 3]".as_slice())]
    #[case(b"\"tasks\"".as_slice())]
    #[case(&[0xff, 0xfe, 0x7b])]
    fn undecodable_bodies_become_empty(#[case] body: &[u8]) {
        assert!(parse_body(body).is_empty());
    }

    #[rstest]
    fn object_bodies_are_kept() {
        let payload = parse_body(br#"{"tasks": [], "strategy": "fast"}"#);
        assert_eq!(payload.get(STRATEGY_FIELD), Some(&json!("fast")));
        assert_eq!(payload.get(TASKS_FIELD), Some(&json!([])));
    }

    #[rstest]
    #[case(json!({}), false)]
    #[case(json!({"tasks": null}), false)]
    #[case(json!({"tasks": "nope"}), false)]
    #[case(json!({"tasks": []}), true)]
    fn required_tasks_needs_an_array(#[case] payload: Value, #[case] accepted: bool) {
        let Value::Object(payload) = payload else {
            panic!("fixture must be an object");
        };
        assert_eq!(required_tasks(&payload).is_ok(), accepted);
    }

    #[rstest]
    #[case(json!({}), Some(0))]
    #[case(json!({"tasks": null}), Some(0))]
    #[case(json!({"tasks": [{}, {}]}), Some(2))]
    #[case(json!({"tasks": {"title": "x"}}), None)]
    #[case(json!({"tasks": 3}), None)]
    fn optional_tasks_tolerates_absence(#[case] payload: Value, #[case] expected: Option<usize>) {
        let Value::Object(payload) = payload else {
            panic!("fixture must be an object");
        };
        let result = optional_tasks(&payload);
        assert_eq!(result.map(<[Value]>::len).ok(), expected);
    }
}

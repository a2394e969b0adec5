use serde::Serialize;
use serde_json::Value;

const REDACTED: &str = "<redacted>";

// Keys carrying temporary credentials in CodePipeline job payloads
const SECRET_KEYS: [&str; 3] = ["secretAccessKey", "sessionToken", "encryptionKey"];

/// Render a value for a log line, pretty-printed JSON when possible.
pub fn inspect<T: Serialize + std::fmt::Debug>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| format!("{:?}", data))
}

/// Copy of an invocation event with artifact credentials masked out.
pub fn redact_event(event: &Value) -> Value {
    match event {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, val)| {
                    if SECRET_KEYS.contains(&key.as_str()) {
                        (key.clone(), Value::String(REDACTED.to_string()))
                    } else {
                        (key.clone(), redact_event(val))
                    }
                })
                .collect(),
        ),
        Value::Array(arr) => Value::Array(arr.iter().map(redact_event).collect()),
        _ => event.clone(),
    }
}

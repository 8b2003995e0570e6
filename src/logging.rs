//! JSON-line event logging.
//!
//! Events are flat JSON objects with `ts`, `level` and `event` keys followed by
//! any extra fields. In the browser they land on the console, natively on
//! stdout (stderr for warnings and errors).

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// Renders an event as a JSON line, or `None` when it is below `min_level`.
pub fn format_event(
    min_level: LogLevel,
    level: LogLevel,
    event: &str,
    fields: serde_json::Value,
    ts: u64,
) -> Option<String> {
    if level < min_level {
        return None;
    }

    let mut payload = serde_json::Map::new();
    payload.insert("ts".to_string(), serde_json::Value::from(ts));
    payload.insert("level".to_string(), serde_json::Value::from(level.as_str()));
    payload.insert("event".to_string(), serde_json::Value::from(event));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Some(serde_json::Value::Object(payload).to_string())
}

pub fn log_event(min_level: LogLevel, level: LogLevel, event: &str, fields: serde_json::Value) {
    if let Some(line) = format_event(min_level, level, event, fields, now_unix_millis()) {
        emit(level, &line);
    }
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Debug => web_sys::console::debug_1(&line),
        LogLevel::Info => web_sys::console::log_1(&line),
        LogLevel::Warn => web_sys::console::warn_1(&line),
        LogLevel::Error => web_sys::console::error_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(level: LogLevel, line: &str) {
    if level >= LogLevel::Warn {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn events_below_minimum_level_are_dropped() {
        let line = format_event(LogLevel::Info, LogLevel::Debug, "tick", json!({}), 1);
        assert!(line.is_none());
    }

    #[test]
    fn event_carries_base_keys_and_extra_fields() {
        let line = format_event(
            LogLevel::Info,
            LogLevel::Error,
            "runtime_fault",
            json!({ "message": "boom" }),
            42,
        )
        .expect("error passes an info threshold");

        let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid JSON");
        assert_eq!(parsed["ts"], 42);
        assert_eq!(parsed["level"], "error");
        assert_eq!(parsed["event"], "runtime_fault");
        assert_eq!(parsed["message"], "boom");
    }

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert_eq!(LogLevel::from_str("warn"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::from_str("trace"), None);
    }
}

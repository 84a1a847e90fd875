use std::{
    cmp::Ordering,
    sync::atomic::{AtomicU8, Ordering as AtomicOrdering},
};

static THRESHOLD: AtomicU8 = AtomicU8::new(LogLevel::Info.rank());

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl LogLevel {
    const fn rank(self) -> u8 {
        match self {
            Self::Debug => 0,
            Self::Info => 1,
            Self::Warn => 2,
        }
    }

    fn from_rank(rank: u8) -> Self {
        match rank {
            0 => Self::Debug,
            1 => Self::Info,
            _ => Self::Warn,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" => Some(Self::Warn),
            _ => None,
        }
    }
}

/// Sets the process-wide threshold. Events below it are dropped.
pub fn init(level: LogLevel) {
    THRESHOLD.store(level.rank(), AtomicOrdering::Relaxed);
}

pub fn threshold() -> LogLevel {
    LogLevel::from_rank(THRESHOLD.load(AtomicOrdering::Relaxed))
}

pub fn enabled(level: LogLevel) -> bool {
    level >= threshold()
}

pub fn log_event(level: LogLevel, event: &str, fields: serde_json::Value) {
    if !enabled(level) {
        return;
    }

    let line = format_event(now_unix_millis(), level, event, fields);
    emit(level, &line.to_string());
}

pub fn format_event(
    ts_millis: u64,
    level: LogLevel,
    event: &str,
    fields: serde_json::Value,
) -> serde_json::Value {
    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(ts_millis)),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.entry(key).or_insert(value);
        }
    }

    serde_json::Value::Object(payload)
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Debug => web_sys::console::debug_1(&value),
        LogLevel::Info => web_sys::console::info_1(&value),
        LogLevel::Warn => web_sys::console::warn_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: LogLevel, line: &str) {
    println!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_order_from_debug_to_warn() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert_eq!(LogLevel::from_rank(LogLevel::Warn.rank()), LogLevel::Warn);
    }

    #[test]
    fn formatted_event_carries_fixed_keys_and_extra_fields() {
        let line = format_event(
            1_700_000_000_000,
            LogLevel::Info,
            "nav_scroll",
            serde_json::json!({ "target": "about", "destination": 640.0 }),
        );

        assert_eq!(line["ts"], 1_700_000_000_000u64);
        assert_eq!(line["level"], "info");
        assert_eq!(line["event"], "nav_scroll");
        assert_eq!(line["target"], "about");
        assert_eq!(line["destination"], 640.0);
    }

    #[test]
    fn extra_fields_cannot_overwrite_fixed_keys() {
        let line = format_event(
            5,
            LogLevel::Warn,
            "mount_failed",
            serde_json::json!({ "event": "spoofed", "level": "debug" }),
        );

        assert_eq!(line["event"], "mount_failed");
        assert_eq!(line["level"], "warn");
    }

    #[test]
    fn non_object_fields_are_ignored() {
        let line = format_event(5, LogLevel::Debug, "tick", serde_json::json!([1, 2, 3]));

        assert_eq!(line.as_object().map(|object| object.len()), Some(3));
    }
}

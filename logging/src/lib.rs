extern crate chrono;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[cfg_attr(test, macro_use)]
extern crate serde_json;

use env_logger::{Builder, Env};
use std::io::Write;

const TIMESTAMP_FORMAT: &'static str = "[%Y-%m-%d][%H:%M:%S]";

#[derive(Serialize, Debug)]
struct LogEntry {
    level: String,
    time: String,
    target: String,
    message: String,
    #[serde(flatten)]
    meta: Option<serde_json::Value>,
}

impl LogEntry {
    fn new(
        level: log::Level,
        target: &str,
        message: &str,
        meta: Option<serde_json::Value>,
    ) -> LogEntry {
        LogEntry {
            level: level.to_string(),
            time: chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string(),
            target: target.to_string(),
            message: message.trim().to_string(),
            meta,
        }
    }
}

/// Writes a log record as a single JSON object so that log collectors can
/// index the individual fields.
///
/// `jlog!(Level::Info, "Venue created")` produces
/// `{"level": "INFO", "target": "none", "message": "Venue created"}`.
/// Metadata can be attached as a JSON literal:
/// ```text
///   jlog!(Level::Error, "Could not commit show", {"venue_id": venue_id})
/// ```
/// An explicit target may be given as the second argument.
#[macro_export]
macro_rules! jlog {
    ($t:path, $msg:expr) => {{
        use $crate::log_message;
        log_message($t, None, $msg, None)
    }};
    ($t:path, $msg:expr, $json:tt) => {{
        use $crate::log_message;
        let meta = json!($json);
        log_message($t, None, $msg, Some(meta))
    }};
    ($t:path, $target: expr, $msg:expr, $json:tt) => {{
        use $crate::log_message;
        let meta = json!($json);
        log_message($t, Some($target), $msg, Some(meta))
    }};
}

pub fn log_message(
    level: log::Level,
    target: Option<&str>,
    msg: &str,
    meta: Option<serde_json::Value>,
) {
    let entry = LogEntry::new(level, target.unwrap_or("none"), msg, meta);
    let encoded = match serde_json::to_string(&entry) {
        Ok(s) => s,
        Err(_) => format!("{:?}", entry),
    };
    match target {
        Some(t) => log!(target: t, level, "{}", encoded),
        None => log!(level, "{}", encoded),
    }
}

fn is_json(msg: &str) -> bool {
    msg.starts_with("{") && msg.ends_with("}")
}

/// Installs an env_logger that emits every record as JSON. Records that are
/// already JSON (eg. those produced by `jlog!`) pass through untouched.
pub fn setup_logger() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let msg = format!("{}", record.args());
            if is_json(&msg) {
                writeln!(buf, "{}", msg)
            } else {
                let entry = LogEntry::new(record.level(), record.target(), &msg, None);
                match serde_json::to_string(&entry) {
                    Ok(s) => writeln!(buf, "{}", s),
                    Err(err) => writeln!(
                        buf,
                        "Failed to serialize log entry: Error: {:?}, Entry: {:?}",
                        err, entry
                    ),
                }
            }
        })
        .init();
}

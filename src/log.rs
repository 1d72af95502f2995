//! Structured logging for the preview server cli.
//!
//! Messages are written in logfmt format with an automatic timestamp and a
//! colored level. Available macros: [`log_info!`], [`log_debug!`],
//! [`log_warn!`] and [`log_error!`].
//!
//! # Example
//!
//! ```ignore
//! log_info!("preview", port = 4000, status = "listening");
//! // Output: time=12:34:56.789 level=info tag=preview port=4000 status=listening
//! ```

use colored::Colorize;
use std::time::SystemTime;

pub fn format_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = now.as_secs() % 86400;
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        (secs / 3600) % 24,
        (secs % 3600) / 60,
        secs % 60,
        now.subsec_millis()
    )
}

/// Quote a logfmt value when it contains whitespace.
fn format_value(value: &str) -> String {
    if value.contains(char::is_whitespace) {
        format!("{value:?}")
    } else {
        value.to_string()
    }
}

pub fn format_logfmt(level: &str, tag: &str, fields: &[(&str, String)]) -> String {
    let mut parts = vec![
        format!("{}={}", "time".dimmed(), format_timestamp()),
        format!("{}={}", "level".dimmed(), level),
        format!("{}={}", "tag".dimmed(), tag),
    ];
    for (key, value) in fields {
        parts.push(format!("{}={}", key.dimmed(), format_value(value)));
    }
    parts.join(" ")
}

#[macro_export]
macro_rules! log_info {
    ($tag:expr, $($key:ident = $value:expr),* $(,)?) => {{
        use colored::Colorize;
        eprintln!("{}", $crate::log::format_logfmt(
            &"info".cyan().to_string(),
            $tag,
            &[$(( stringify!($key), format!("{}", $value) )),*]
        ))
    }};
}

#[macro_export]
macro_rules! log_debug {
    ($tag:expr, $($key:ident = $value:expr),* $(,)?) => {{
        use colored::Colorize;
        eprintln!("{}", $crate::log::format_logfmt(
            &"debug".dimmed().to_string(),
            $tag,
            &[$(( stringify!($key), format!("{}", $value) )),*]
        ))
    }};
}

#[macro_export]
macro_rules! log_warn {
    ($tag:expr, $($key:ident = $value:expr),* $(,)?) => {{
        use colored::Colorize;
        eprintln!("{}", $crate::log::format_logfmt(
            &"warn".yellow().to_string(),
            $tag,
            &[$(( stringify!($key), format!("{}", $value) )),*]
        ))
    }};
}

#[macro_export]
macro_rules! log_error {
    ($tag:expr, $($key:ident = $value:expr),* $(,)?) => {{
        use colored::Colorize;
        eprintln!("{}", $crate::log::format_logfmt(
            &"error".red().to_string(),
            $tag,
            &[$(( stringify!($key), format!("{}", $value) )),*]
        ))
    }};
}

//! # Structured logging
//!
//! Key/value logging macros layered over the `log` facade. Context pairs accept
//! any `Display` value and are rendered after the message as `key=value`.
//! The host application chooses the backend (for example `env_logger`).

pub mod codes;
mod macros;

pub use codes::Code;
pub use log::Level;

/// Log target used for every record emitted by this crate
pub const LOG_TARGET: &str = "oval_agent";

/// Render a message with its optional code and context pairs
pub fn render(code: Option<Code>, message: &str, context: &[(&str, String)]) -> String {
    let mut line = match code {
        Some(code) => format!("[{}] {}", code, message),
        None => message.to_string(),
    };

    for (key, value) in context {
        line.push(' ');
        line.push_str(key);
        line.push('=');
        if value.contains(char::is_whitespace) {
            line.push_str(&format!("{:?}", value));
        } else {
            line.push_str(value);
        }
    }

    line
}

/// Emit one record through the `log` facade
pub fn emit(level: Level, code: Option<Code>, message: &str, context: &[(&str, String)]) {
    if log::log_enabled!(target: LOG_TARGET, level) {
        log::log!(target: LOG_TARGET, level, "{}", render(code, message, context));
    }
}

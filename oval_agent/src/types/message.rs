use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity attached to a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    None,
    Debug,
    Info,
    Warning,
    Error,
    Fatal,
}

impl MessageLevel {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "none" => Some(MessageLevel::None),
            "debug" => Some(MessageLevel::Debug),
            "info" => Some(MessageLevel::Info),
            "warning" => Some(MessageLevel::Warning),
            "error" => Some(MessageLevel::Error),
            "fatal" => Some(MessageLevel::Fatal),
            _ => None,
        }
    }

    /// Parse a `level` attribute, falling back to `Info` when absent or unrecognized
    pub fn parse_or_default(level: Option<&str>) -> Self {
        level.and_then(Self::from_str).unwrap_or(MessageLevel::Info)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MessageLevel::None => "none",
            MessageLevel::Debug => "debug",
            MessageLevel::Info => "info",
            MessageLevel::Warning => "warning",
            MessageLevel::Error => "error",
            MessageLevel::Fatal => "fatal",
        }
    }
}

impl Default for MessageLevel {
    fn default() -> Self {
        MessageLevel::None
    }
}

impl fmt::Display for MessageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Diagnostic text with a severity, attached to collected objects
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    text: Option<String>,
    level: MessageLevel,
}

impl Message {
    pub fn new(text: impl Into<String>, level: MessageLevel) -> Self {
        Self {
            text: Some(text.into()),
            level,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, MessageLevel::Error)
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn level(&self) -> MessageLevel {
        self.level
    }

    pub fn set_text(&mut self, text: Option<String>) {
        self.text = text;
    }

    pub fn set_level(&mut self, level: MessageLevel) {
        self.level = level;
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.text.as_deref().unwrap_or(""))
    }
}

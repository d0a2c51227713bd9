use super::ip_address::{parse_ipv4_network, parse_ipv6_network};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// OVAL simple datatypes a variable may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Datatype {
    Binary,
    Boolean,
    EvrString,
    Float,
    Int,
    Ipv4Address,
    Ipv6Address,
    String,
    Version,
}

impl Datatype {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "binary" => Some(Datatype::Binary),
            "boolean" => Some(Datatype::Boolean),
            "evr_string" => Some(Datatype::EvrString),
            "float" => Some(Datatype::Float),
            "int" => Some(Datatype::Int),
            "ipv4_address" => Some(Datatype::Ipv4Address),
            "ipv6_address" => Some(Datatype::Ipv6Address),
            "string" => Some(Datatype::String),
            "version" => Some(Datatype::Version),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Datatype::Binary => "binary",
            Datatype::Boolean => "boolean",
            Datatype::EvrString => "evr_string",
            Datatype::Float => "float",
            Datatype::Int => "int",
            Datatype::Ipv4Address => "ipv4_address",
            Datatype::Ipv6Address => "ipv6_address",
            Datatype::String => "string",
            Datatype::Version => "version",
        }
    }

    /// Check whether textual `value` is a well-formed value of this datatype
    pub fn accepts(self, value: &str) -> bool {
        match self {
            Datatype::String => true,
            Datatype::Binary => {
                value.len() % 2 == 0 && value.chars().all(|c| c.is_ascii_hexdigit())
            }
            Datatype::Boolean => matches!(value, "true" | "false" | "1" | "0"),
            Datatype::Float => value.trim().parse::<f64>().is_ok(),
            Datatype::Int => value.trim().parse::<i64>().is_ok(),
            Datatype::Ipv4Address => parse_ipv4_network(value).is_some(),
            Datatype::Ipv6Address => parse_ipv6_network(value).is_some(),
            Datatype::EvrString => evr_pattern().is_some_and(|p| p.is_match(value)),
            Datatype::Version => version_pattern().is_some_and(|p| p.is_match(value)),
        }
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// epoch:version-release
fn evr_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^\d+:[^\s:]+-[^\s:-]+$").ok())
        .as_ref()
}

// numeric components joined by any non-digit delimiter
fn version_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^\d+(?:[^\d\s]+\d+)*$").ok())
        .as_ref()
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of publishers a book can carry.
///
/// Stored as the PostgreSQL enum type `publisher`; serialized in uppercase
/// to match the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "publisher", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Publisher {
    Pollub,
    Umcs,
    Up,
}

impl Publisher {
    /// All constant names, in declaration order. Used by validation messages.
    pub const NAMES: [&'static str; 3] = ["POLLUB", "UMCS", "UP"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Publisher::Pollub => "POLLUB",
            Publisher::Umcs => "UMCS",
            Publisher::Up => "UP",
        }
    }
}

impl fmt::Display for Publisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Publisher {
    type Err = ();

    /// Parse an exact constant name. Case-sensitive, like the wire format.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "POLLUB" => Ok(Publisher::Pollub),
            "UMCS" => Ok(Publisher::Umcs),
            "UP" => Ok(Publisher::Up),
            _ => Err(()),
        }
    }
}

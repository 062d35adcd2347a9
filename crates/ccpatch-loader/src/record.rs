//! Compilation database records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of a compilation database.
///
/// The entry is kept as the raw JSON object so that keys this tool does not
/// know about, and the order of all keys, survive a load/save round trip.
/// Only `command` is ever written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompileRecord(Map<String, Value>);

impl CompileRecord {
    /// The working directory of the compilation, if present.
    pub fn directory(&self) -> Option<&str> {
        self.0.get("directory").and_then(Value::as_str)
    }

    /// The main source file, if present.
    pub fn file(&self) -> Option<&str> {
        self.0.get("file").and_then(Value::as_str)
    }

    /// The single-string command line, if present and a string.
    pub fn command(&self) -> Option<&str> {
        self.0.get("command").and_then(Value::as_str)
    }

    /// Whether the record uses the list-of-arguments form.
    pub fn has_arguments(&self) -> bool {
        self.0.contains_key("arguments")
    }

    /// Replace the value of `command`, keeping its position among the keys.
    pub fn set_command(&mut self, command: String) {
        self.0.insert("command".to_string(), Value::String(command));
    }

    /// Access a field by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Field names in their stored order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

//! Read-only string metadata attached to an envelope.

use alloc::string::String;

use hashbrown::HashMap;

/// String key/value metadata carried alongside a message.
///
/// Headers are built before the envelope is sent and read-only afterwards.
#[derive(Clone, Debug, Default)]
pub struct MessageHeader {
  entries: HashMap<String, String>,
}

impl MessageHeader {
  /// Creates an empty header map.
  #[must_use]
  pub fn new() -> Self {
    Self { entries: HashMap::new() }
  }

  /// Adds an entry, replacing any previous value under the same key.
  #[must_use]
  pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.entries.insert(key.into(), value.into());
    self
  }

  /// Returns the value stored under `key`, if any.
  #[must_use]
  pub fn get(&self, key: &str) -> Option<&str> {
    self.entries.get(key).map(String::as_str)
  }

  /// Returns the number of entries.
  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns `true` when no entries are present.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Iterates over all entries.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.entries.iter().map(|(key, value)| (key.as_str(), value.as_str()))
  }
}

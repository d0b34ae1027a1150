//! The request bag itself.

use crate::emptiness::is_empty_value;
use parking_lot::RwLock;
use serde_json::{Map, Value};

/// A string-keyed store of arbitrary values that lives for one request.
///
/// Every operation takes `&self` so the bag can be shared by reference within
/// its request scope, and the mutators return `&Self` for chaining:
///
/// ```
/// use request_bag::RequestBag;
///
/// let bag = RequestBag::new();
/// bag.add("user_id", 42).add("locale", "en").remove("user_id");
///
/// assert!(!bag.exists("user_id"));
/// assert_eq!(bag.get_or("locale", "fr"), "en");
/// ```
///
/// No operation fails. Missing keys read as `None` (or the supplied default)
/// and removing a missing key does nothing.
#[derive(Debug, Default)]
pub struct RequestBag {
  entries: RwLock<Map<String, Value>>,
}

impl RequestBag {
  /// Creates an empty bag.
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a bag that starts out holding `entries`.
  pub fn from_entries(entries: Map<String, Value>) -> Self {
    Self {
      entries: RwLock::new(entries),
    }
  }

  /// Stores `value` under `key`, replacing any previous value.
  pub fn add(&self, key: impl Into<String>, value: impl Into<Value>) -> &Self {
    let key = key.into();
    tracing::trace!(key = %key, "bag add");
    self.entries.write().insert(key, value.into());
    self
  }

  /// Returns a copy of the value stored under `key`, if any.
  ///
  /// A key explicitly set to `null` yields `Some(Value::Null)`.
  pub fn get(&self, key: &str) -> Option<Value> {
    self.entries.read().get(key).cloned()
  }

  /// Returns the value stored under `key`, or `default` if the key is absent.
  pub fn get_or(&self, key: &str, default: impl Into<Value>) -> Value {
    self.get(key).unwrap_or_else(|| default.into())
  }

  /// `true` if `key` is present and its value is not empty.
  ///
  /// See [`is_empty_value`] for what counts as empty.
  pub fn has(&self, key: &str) -> bool {
    self
      .entries
      .read()
      .get(key)
      .is_some_and(|value| !is_empty_value(value))
  }

  /// `true` if `key` is present, whatever its value.
  pub fn exists(&self, key: &str) -> bool {
    self.entries.read().contains_key(key)
  }

  /// Removes `key` if present.
  pub fn remove(&self, key: &str) -> &Self {
    if self.entries.write().remove(key).is_some() {
      tracing::trace!(key = %key, "bag remove");
    }
    self
  }

  /// A snapshot of every entry.
  pub fn all(&self) -> Map<String, Value> {
    self.entries.read().clone()
  }

  /// Removes every entry.
  pub fn clear(&self) -> &Self {
    let mut entries = self.entries.write();
    tracing::trace!(count = entries.len(), "bag clear");
    entries.clear();
    self
  }

  /// Writes every pair from `data` into the bag. Keys already in the bag are
  /// overwritten; keys not mentioned in `data` are left alone.
  pub fn merge<I, K, V>(&self, data: I) -> &Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
  {
    let mut entries = self.entries.write();
    let before = entries.len();
    for (key, value) in data {
      entries.insert(key.into(), value.into());
    }
    tracing::trace!(new_keys = entries.len() - before, total = entries.len(), "bag merge");
    self
  }

  pub fn len(&self) -> usize {
    self.entries.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.read().is_empty()
  }

  pub fn keys(&self) -> Vec<String> {
    self.entries.read().keys().cloned().collect()
  }
}

impl Clone for RequestBag {
  fn clone(&self) -> Self {
    Self::from_entries(self.all())
  }
}

impl From<Map<String, Value>> for RequestBag {
  fn from(entries: Map<String, Value>) -> Self {
    Self::from_entries(entries)
  }
}

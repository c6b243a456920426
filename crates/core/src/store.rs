//! High-score persistence seam.

use std::collections::HashMap;

/// Key/value persistence for the best score
///
/// Read once when the engine is built and written once per game over that
/// beats the stored value. Implementations own their failure handling; the
/// engine never sees an error.
pub trait HighScoreStore {
    /// Stored value for `key`, 0 when absent
    fn get(&self, key: &str) -> u32;

    fn set(&mut self, key: &str, value: u32);
}

impl<T: HighScoreStore + ?Sized> HighScoreStore for Box<T> {
    fn get(&self, key: &str) -> u32 {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: u32) {
        (**self).set(key, value)
    }
}

/// In-memory store (tests, or persistence disabled)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, u32>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with one value
    pub fn with_value(key: &str, value: u32) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value);
        Self { values, writes: 0 }
    }

    /// Number of `set` calls so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl HighScoreStore for MemoryStore {
    fn get(&self, key: &str) -> u32 {
        self.values.get(key).copied().unwrap_or(0)
    }

    fn set(&mut self, key: &str, value: u32) {
        self.values.insert(key.to_string(), value);
        self.writes += 1;
    }
}

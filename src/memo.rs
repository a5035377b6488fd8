//! Dependency-keyed cache for derived state

/// Caches one value together with the dependency key it was computed from
///
/// The value is recomputed only when the key changes.
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    entry: Option<(K, V)>,
    computations: u64,
}

impl<K: PartialEq, V> Memo<K, V> {
    pub fn new() -> Self {
        Self {
            entry: None,
            computations: 0,
        }
    }

    /// Return the cached value for `key`, computing it if the key changed
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> V) -> &V {
        let stale = !matches!(&self.entry, Some((cached, _)) if *cached == key);
        if stale {
            self.computations += 1;
            self.entry = None;
        }
        let (_, value) = self.entry.get_or_insert_with(|| (key, compute()));
        value
    }

    pub fn get(&self) -> Option<&V> {
        self.entry.as_ref().map(|(_, value)| value)
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// How many times the value has been computed
    pub fn computations(&self) -> u64 {
        self.computations
    }
}

impl<K: PartialEq, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

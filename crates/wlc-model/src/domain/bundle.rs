use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Set of files uploaded alongside a workload: path → payload.
///
/// Keys are kept sorted so that every traversal is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileBundle(pub BTreeMap<String, Vec<u8>>);

impl FileBundle {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Insert or replace a file.
    pub fn insert(&mut self, path: impl Into<String>, payload: impl Into<Vec<u8>>) -> &mut Self {
        self.0.insert(path.into(), payload.into());
        self
    }

    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.0.get(path).map(|v| v.as_slice())
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Total payload size in bytes.
    pub fn total_bytes(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

impl<K, V> FromIterator<(K, V)> for FileBundle
where
    K: Into<String>,
    V: Into<Vec<u8>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

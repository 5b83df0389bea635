use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Label set attached to orchestrator objects, ordered by key.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Labels(pub BTreeMap<String, String>);

impl Labels {
    /// Create an empty set of labels.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Insert or overwrite a label.
    ///
    /// Returns `self` for chaining.
    pub fn insert<K, V>(&mut self, key: K, val: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(key.into(), val.into());
        self
    }

    /// Get the value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    /// Iterate through all labels as `(&str, &str)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns `true` if every label in `selector` is present here with the same value.
    pub fn matches(&self, selector: &Labels) -> bool {
        selector.iter().all(|(k, v)| self.get(k) == Some(v))
    }

    /// Render as an equality label selector: `k1=v1,k2=v2`.
    ///
    /// Values are interpolated as-is; no escaping is performed.
    pub fn to_selector(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl<K, V> FromIterator<(K, V)> for Labels
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::Labels;

    #[test]
    fn selector_is_sorted_and_comma_joined() {
        let labels: Labels = [("unit-version", "1.0"), ("owner", "peer0"), ("unit-name", "cc")]
            .into_iter()
            .collect();

        assert_eq!(
            labels.to_selector(),
            "owner=peer0,unit-name=cc,unit-version=1.0"
        );
    }

    #[test]
    fn empty_labels_render_empty_selector() {
        assert_eq!(Labels::new().to_selector(), "");
    }

    #[test]
    fn matches_requires_every_selector_term() {
        let labels: Labels = [("owner", "peer0"), ("unit-name", "cc")].into_iter().collect();
        let hit: Labels = [("owner", "peer0")].into_iter().collect();
        let miss: Labels = [("owner", "peer0"), ("unit-name", "other")]
            .into_iter()
            .collect();

        assert!(labels.matches(&hit));
        assert!(labels.matches(&Labels::new()));
        assert!(!labels.matches(&miss));
    }
}

//! Raw point-of-interest records

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A tagged map feature as returned by the points-of-interest service
///
/// Geometry-only elements (the nodes of a way, for example) carry no tags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoiRecord {
    /// OSM element id
    #[serde(default)]
    pub id: Option<u64>,
    /// OSM tags such as `tourism`, `historic`, `name:en`, `wikidata`
    #[serde(default)]
    pub tags: Option<HashMap<String, String>>,
}

impl PoiRecord {
    /// Build a record from `(key, value)` tag pairs
    #[must_use]
    pub fn with_tags<K, V>(tags: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            id: None,
            tags: Some(
                tags.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Value of a tag, if present
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.as_ref()?.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn has_tag(&self, key: &str) -> bool {
        self.tag(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_element_without_tags() {
        let record: PoiRecord =
            serde_json::from_str(r#"{"type":"node","id":42,"lat":1.0,"lon":2.0}"#).unwrap();
        assert_eq!(record.id, Some(42));
        assert!(record.tags.is_none());
        assert!(!record.has_tag("name"));
    }

    #[test]
    fn test_tag_lookup() {
        let record = PoiRecord::with_tags([("tourism", "museum"), ("name", "Louvre")]);
        assert_eq!(record.tag("tourism"), Some("museum"));
        assert!(record.has_tag("name"));
        assert_eq!(record.tag("historic"), None);
    }
}

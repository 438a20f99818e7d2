use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single entry in the upstream model catalog.
///
/// Only the `id` field is interpreted; everything else the upstream
/// attaches (display names, families, quantization details, ...) is
/// carried through untouched so both response modes can surface it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ModelDescriptor {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Selects the first descriptor whose id equals `model`.
///
/// Duplicated ids are tolerated; the scan order is the catalog order,
/// so the earliest entry wins. An unset `model` never matches.
pub(crate) fn first_match<'c>(
    catalog: &'c [ModelDescriptor],
    model: Option<&str>,
) -> Option<&'c ModelDescriptor> {
    let model = model?;

    catalog.iter().find(|descriptor| descriptor.id == model)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(id: &str, name: &str) -> ModelDescriptor {
        let mut fields = Map::new();
        fields.insert("name".to_string(), Value::String(name.to_string()));

        ModelDescriptor {
            id: id.to_string(),
            fields,
        }
    }

    #[test]
    fn test_first_match_selects_by_id() {
        let catalog = [descriptor("a", "Alpha"), descriptor("b", "Beta")];

        let matched = first_match(&catalog, Some("b")).unwrap();

        assert_eq!(matched.id, "b");
        assert_eq!(matched.fields["name"], "Beta");
    }

    #[test]
    fn test_first_match_wins_on_duplicates() {
        let catalog = [
            descriptor("a", "Alpha"),
            descriptor("dup", "First"),
            descriptor("dup", "Second"),
        ];

        let matched = first_match(&catalog, Some("dup")).unwrap();

        assert_eq!(matched.fields["name"], "First");
    }

    #[test]
    fn test_unset_model_never_matches() {
        let catalog = [descriptor("a", "Alpha")];

        assert!(first_match(&catalog, None).is_none());
    }

    #[test]
    fn test_unknown_model_yields_none() {
        let catalog = [descriptor("a", "Alpha"), descriptor("b", "Beta")];

        assert!(first_match(&catalog, Some("z")).is_none());
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let catalog = [descriptor("Alpha", "Alpha")];

        assert!(first_match(&catalog, Some("alpha")).is_none());
        assert!(first_match(&catalog, Some("Alpha")).is_some());
    }

    #[test]
    fn test_matching_is_deterministic() {
        let catalog = [descriptor("a", "Alpha"), descriptor("b", "Beta")];

        let first = first_match(&catalog, Some("a"));
        let second = first_match(&catalog, Some("a"));

        assert_eq!(first, second);
    }

    #[test]
    fn test_descriptor_extra_fields_roundtrip() {
        let raw = serde_json::json!({
            "id": "a",
            "name": "Alpha",
            "context_length": 128000
        });

        let descriptor: ModelDescriptor = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(descriptor.id, "a");
        assert_eq!(serde_json::to_value(&descriptor).unwrap(), raw);
    }
}

//! Ordered merge of property maps

use super::Properties;

/// Returns `base` with every entry of `overlay` applied on top of it.
///
/// Entries of `overlay` replace same-named entries of `base`.
pub fn merge(base: Properties, overlay: Properties) -> Properties {
    let mut merged = base;
    merged.extend(overlay);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::JSONSchemaProps;

    fn typed(t: &str) -> JSONSchemaProps {
        JSONSchemaProps {
            type_: Some(t.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn overlay_wins_on_collision() {
        let base = Properties::from([
            ("a".to_string(), typed("string")),
            ("b".to_string(), typed("string")),
        ]);
        let overlay = Properties::from([
            ("b".to_string(), typed("object")),
            ("c".to_string(), typed("integer")),
        ]);

        let merged = merge(base, overlay);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged["a"].type_.as_deref(), Some("string"));
        assert_eq!(merged["b"].type_.as_deref(), Some("object"));
        assert_eq!(merged["c"].type_.as_deref(), Some("integer"));
    }
}

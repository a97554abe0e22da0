//! Schema fragments and printer columns every composite and claim CRD carries
//!
//! Every function builds a fresh value, so callers are free to mutate what
//! they get back.

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    CustomResourceColumnDefinition, JSONSchemaProps, JSONSchemaPropsOrArray,
    JSONSchemaPropsOrBool, JSON,
};
use serde_json::json;

use super::Properties;

/// Description attached to fields that may change without notice
const ALPHA_DESCRIPTION: &str = "Alpha: This field may be deprecated or changed without notice.";

fn typed(type_: &str) -> JSONSchemaProps {
    JSONSchemaProps {
        type_: Some(type_.to_string()),
        ..Default::default()
    }
}

fn string() -> JSONSchemaProps {
    typed("string")
}

fn date_time() -> JSONSchemaProps {
    JSONSchemaProps {
        format: Some("date-time".to_string()),
        ..string()
    }
}

fn object(required: &[&str], properties: Properties) -> JSONSchemaProps {
    JSONSchemaProps {
        required: (!required.is_empty()).then(|| required.iter().map(|r| r.to_string()).collect()),
        properties: Some(properties),
        ..typed("object")
    }
}

/// Object with the named string properties
fn strings_object(required: &[&str], names: &[&str]) -> JSONSchemaProps {
    object(
        required,
        names.iter().map(|n| (n.to_string(), string())).collect(),
    )
}

fn string_map() -> JSONSchemaProps {
    JSONSchemaProps {
        additional_properties: Some(JSONSchemaPropsOrBool::Schema(Box::new(string()))),
        ..typed("object")
    }
}

fn string_enum(values: &[&str], default: &str) -> JSONSchemaProps {
    JSONSchemaProps {
        enum_: Some(values.iter().map(|v| JSON(json!(v))).collect()),
        default: Some(JSON(json!(default))),
        ..string()
    }
}

fn props<const N: usize>(entries: [(&str, JSONSchemaProps); N]) -> Properties {
    entries
        .into_iter()
        .map(|(name, schema)| (name.to_string(), schema))
        .collect()
}

/// The envelope every generated schema starts from: `apiVersion`, `kind`,
/// `metadata`, and empty `spec`/`status` objects ready for overlay.
pub fn base_props() -> JSONSchemaProps {
    object(
        &["spec"],
        props([
            ("apiVersion", string()),
            ("kind", string()),
            // the API server validates metadata itself
            ("metadata", typed("object")),
            ("spec", object(&[], Properties::new())),
            ("status", object(&[], Properties::new())),
        ]),
    )
}

/// Spec fields shared by composites and claims for selecting a composition.
/// `alpha` marks the revision fields as subject to change.
fn composition_props(alpha: bool) -> Properties {
    let description = alpha.then(|| ALPHA_DESCRIPTION.to_string());

    props([
        ("compositionRef", strings_object(&["name"], &["name"])),
        (
            "compositionSelector",
            object(&["matchLabels"], props([("matchLabels", string_map())])),
        ),
        (
            "compositionRevisionRef",
            JSONSchemaProps {
                description: description.clone(),
                ..strings_object(&["name"], &["name"])
            },
        ),
        (
            "compositionUpdatePolicy",
            JSONSchemaProps {
                description,
                ..string_enum(&["Automatic", "Manual"], "Automatic")
            },
        ),
    ])
}

fn publish_connection_details_to() -> JSONSchemaProps {
    object(
        &["name"],
        props([
            ("name", string()),
            (
                "configRef",
                JSONSchemaProps {
                    default: Some(JSON(json!({"name": "default"}))),
                    ..strings_object(&[], &["name"])
                },
            ),
            (
                "metadata",
                object(
                    &[],
                    props([
                        ("labels", string_map()),
                        ("annotations", string_map()),
                        ("type", string()),
                    ]),
                ),
            ),
        ]),
    )
}

/// Spec fields every composite resource exposes
pub fn composite_spec_props() -> Properties {
    let mut spec = composition_props(true);
    spec.extend(props([
        (
            "claimRef",
            strings_object(
                &["apiVersion", "kind", "namespace", "name"],
                &["apiVersion", "kind", "namespace", "name"],
            ),
        ),
        (
            "resourceRefs",
            JSONSchemaProps {
                items: Some(JSONSchemaPropsOrArray::Schema(Box::new(strings_object(
                    &["apiVersion", "kind"],
                    &["apiVersion", "name", "kind"],
                )))),
                ..typed("array")
            },
        ),
        ("publishConnectionDetailsTo", publish_connection_details_to()),
        (
            "writeConnectionSecretToRef",
            strings_object(&["name", "namespace"], &["name", "namespace"]),
        ),
    ]));
    spec
}

/// Spec fields every claim exposes
pub fn claim_spec_props() -> Properties {
    let mut spec = composition_props(false);
    spec.extend(props([
        (
            "compositeDeletePolicy",
            string_enum(&["Background", "Foreground"], "Background"),
        ),
        (
            "resourceRef",
            strings_object(
                &["apiVersion", "kind", "name"],
                &["apiVersion", "kind", "name"],
            ),
        ),
        ("publishConnectionDetailsTo", publish_connection_details_to()),
        // a claim's secret always lives in the claim's namespace
        (
            "writeConnectionSecretToRef",
            strings_object(&["name"], &["name"]),
        ),
    ]));
    spec
}

/// Status fields shared by composites and claims
pub fn status_props() -> Properties {
    props([
        (
            "conditions",
            JSONSchemaProps {
                description: Some("Conditions of the resource.".to_string()),
                items: Some(JSONSchemaPropsOrArray::Schema(Box::new(object(
                    &["lastTransitionTime", "reason", "status", "type"],
                    props([
                        ("lastTransitionTime", date_time()),
                        ("message", string()),
                        ("reason", string()),
                        ("status", string()),
                        ("type", string()),
                    ]),
                )))),
                ..typed("array")
            },
        ),
        (
            "connectionDetails",
            object(&[], props([("lastPublishedTime", date_time())])),
        ),
    ])
}

fn column(name: &str, type_: &str, json_path: &str) -> CustomResourceColumnDefinition {
    CustomResourceColumnDefinition {
        name: name.to_string(),
        type_: type_.to_string(),
        json_path: json_path.to_string(),
        ..Default::default()
    }
}

fn condition_column(name: &str, condition: &str) -> CustomResourceColumnDefinition {
    column(
        name,
        "string",
        &format!(".status.conditions[?(@.type=='{}')].status", condition),
    )
}

fn age_column() -> CustomResourceColumnDefinition {
    column("AGE", "date", ".metadata.creationTimestamp")
}

/// Columns appended to every composite CRD version
pub fn composite_printer_columns() -> Vec<CustomResourceColumnDefinition> {
    vec![
        condition_column("SYNCED", "Synced"),
        condition_column("READY", "Ready"),
        column("COMPOSITION", "string", ".spec.compositionRef.name"),
        age_column(),
    ]
}

/// Columns appended to every claim CRD version
pub fn claim_printer_columns() -> Vec<CustomResourceColumnDefinition> {
    vec![
        condition_column("SYNCED", "Synced"),
        condition_column("READY", "Ready"),
        column(
            "CONNECTION-SECRET",
            "string",
            ".spec.writeConnectionSecretToRef.name",
        ),
        age_column(),
    ]
}

//! Extraction of user-declared `spec`/`status` properties from a raw XRD schema

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::JSONSchemaProps;
use serde_json::Value;

use super::Properties;
use crate::crd::CompositeResourceValidation;
use crate::{Error, Result};

/// Properties and required list declared for one top-level field
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldProps {
    pub properties: Properties,
    pub required: Vec<String>,
}

/// Read the properties and required list of `field` from a version's schema.
///
/// A missing schema, or a schema that does not declare `field`, yields empty
/// results, and so does a `null` entry such as an empty YAML key. A schema
/// that is not a structured JSON schema fails with [`Error::SchemaParse`].
pub fn props(field: &str, validation: Option<&CompositeResourceValidation>) -> Result<FieldProps> {
    let Some(raw) = validation
        .map(|v| &v.open_api_v3_schema)
        .filter(|raw| !raw.is_null())
    else {
        return Ok(FieldProps::default());
    };

    let schema: JSONSchemaProps = serde_json::from_value(without_nulls(raw.clone()))
        .map_err(|source| Error::SchemaParse {
            field: field.to_string(),
            source,
        })?;

    let Some(declared) = schema.properties.and_then(|mut p| p.remove(field)) else {
        return Ok(FieldProps::default());
    };

    Ok(FieldProps {
        properties: declared.properties.unwrap_or_default(),
        required: declared.required.unwrap_or_default(),
    })
}

/// Keywords whose values are maps of named schemas
const SCHEMA_MAPS: [&str; 4] = [
    "properties",
    "patternProperties",
    "definitions",
    "dependencies",
];

/// Keywords holding arbitrary JSON rather than schemas
const RAW_JSON: [&str; 3] = ["enum", "default", "example"];

/// Drop `null` keywords and turn `null` named schemas into empty schemas,
/// the way an absent value would read.
fn without_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| {
                    let v = match v {
                        _ if RAW_JSON.contains(&k.as_str()) => v,
                        Value::Object(named) if SCHEMA_MAPS.contains(&k.as_str()) => {
                            Value::Object(
                                named
                                    .into_iter()
                                    .map(|(name, schema)| match schema {
                                        Value::Null => (name, Value::Object(Default::default())),
                                        schema => (name, without_nulls(schema)),
                                    })
                                    .collect(),
                            )
                        }
                        v => without_nulls(v),
                    };
                    (k, v)
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(without_nulls).collect()),
        v => v,
    }
}

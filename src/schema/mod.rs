//! Schema extraction, merging, and the framework schema catalog

pub mod catalog;
pub mod merge;
pub mod props;

use std::collections::BTreeMap;

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::JSONSchemaProps;

/// Named properties of an object schema
pub type Properties = BTreeMap<String, JSONSchemaProps>;

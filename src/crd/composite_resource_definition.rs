//! CompositeResourceDefinition (XRD) Custom Resource Definition

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    CustomResourceColumnDefinition, CustomResourceDefinitionNames,
};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// CompositeResourceDefinition specification
///
/// Declares a new kind of composite resource and, optionally, the claim that
/// namespaced users may create to request one.
#[derive(CustomResource, Clone, Debug, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "apiextensions.crossplane.io",
    version = "v1",
    kind = "CompositeResourceDefinition",
    plural = "compositeresourcedefinitions",
    singular = "compositeresourcedefinition",
    shortname = "xrd",
    shortname = "xrds",
    category = "crossplane"
)]
#[serde(rename_all = "camelCase")]
pub struct CompositeResourceDefinitionSpec {
    /// API group of the defined composite resource and its claim
    pub group: String,

    /// Names of the defined composite resource
    pub names: CustomResourceDefinitionNames,

    /// Names of the claim, if the composite resource may be claimed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_names: Option<CustomResourceDefinitionNames>,

    /// All served versions of the defined composite resource
    pub versions: Vec<CompositeResourceDefinitionVersion>,
}

/// A single API version of a composite resource
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompositeResourceDefinitionVersion {
    /// Version name, e.g. v1alpha1
    pub name: String,

    /// Whether this version is served through the REST API
    pub served: bool,

    /// Whether this version is the one stored and referenced by compositions.
    /// Exactly one version should be referenceable.
    pub referenceable: bool,

    /// Whether this version is deprecated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,

    /// Warning returned to API clients using a deprecated version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_warning: Option<String>,

    /// Additional columns shown by `kubectl get`, ahead of the defaults
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_printer_columns: Vec<CustomResourceColumnDefinition>,

    /// Schema of this version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<CompositeResourceValidation>,
}

/// Validation schema of a composite resource version
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema)]
pub struct CompositeResourceValidation {
    /// Raw OpenAPI v3 schema, kept opaque until a CRD is derived from it
    #[serde(default, rename = "openAPIV3Schema")]
    pub open_api_v3_schema: serde_json::Value,
}

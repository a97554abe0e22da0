//! Assembly of CRD versions and CRDs shared by the composite and claim builders

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    CustomResourceColumnDefinition, CustomResourceDefinition, CustomResourceDefinitionNames,
    CustomResourceDefinitionSpec, CustomResourceDefinitionVersion, CustomResourceSubresourceStatus,
    CustomResourceSubresources, CustomResourceValidation, JSONSchemaProps,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde_json::json;
use std::fmt;

use crate::crd::{CompositeResourceDefinition, CompositeResourceDefinitionVersion};
use crate::schema::catalog;
use crate::schema::merge::merge;
use crate::schema::props::{props, FieldProps};
use crate::schema::Properties;
use crate::Result;

const SPEC: &str = "spec";
const STATUS: &str = "status";

/// Category added to every composite CRD
pub const CATEGORY_COMPOSITE: &str = "composite";
/// Category added to every claim CRD
pub const CATEGORY_CLAIM: &str = "claim";

/// Scope of a generated CRD
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    Cluster,
    Namespaced,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Cluster => write!(f, "Cluster"),
            Scope::Namespaced => write!(f, "Namespaced"),
        }
    }
}

/// What distinguishes a composite CRD from a claim CRD
#[derive(Clone, Copy, Debug)]
pub struct ResourceFlavor {
    pub scope: Scope,
    pub category: &'static str,
    pub spec_props: fn() -> Properties,
    pub printer_columns: fn() -> Vec<CustomResourceColumnDefinition>,
}

/// Cluster-scoped composite resources
pub const COMPOSITE: ResourceFlavor = ResourceFlavor {
    scope: Scope::Cluster,
    category: CATEGORY_COMPOSITE,
    spec_props: catalog::composite_spec_props,
    printer_columns: catalog::composite_printer_columns,
};

/// Namespaced claims
pub const CLAIM: ResourceFlavor = ResourceFlavor {
    scope: Scope::Namespaced,
    category: CATEGORY_CLAIM,
    spec_props: catalog::claim_spec_props,
    printer_columns: catalog::claim_printer_columns,
};

/// How user-declared required fields combine with the envelope's
enum RequiredMerge {
    Append,
    Replace,
}

/// Build a CRD named `name` with `names`, one version per XRD version
pub fn build_crd(
    xrd: &CompositeResourceDefinition,
    name: String,
    mut names: CustomResourceDefinitionNames,
    flavor: &ResourceFlavor,
) -> Result<CustomResourceDefinition> {
    let categories = names.categories.get_or_insert_with(Vec::new);
    if !categories.iter().any(|c| c == flavor.category) {
        categories.push(flavor.category.to_string());
    }

    let versions = xrd
        .spec
        .versions
        .iter()
        .map(|version| build_version(version, flavor))
        .collect::<Result<Vec<_>>>()?;

    Ok(CustomResourceDefinition {
        metadata: ObjectMeta {
            name: Some(name),
            labels: xrd.metadata.labels.clone(),
            ..Default::default()
        },
        spec: CustomResourceDefinitionSpec {
            group: xrd.spec.group.clone(),
            names,
            scope: flavor.scope.to_string(),
            versions,
            ..Default::default()
        },
        status: None,
    })
}

/// Build one CRD version from an XRD version
pub fn build_version(
    version: &CompositeResourceDefinitionVersion,
    flavor: &ResourceFlavor,
) -> Result<CustomResourceDefinitionVersion> {
    let user_spec = props(SPEC, version.schema.as_ref())?;
    let user_status = props(STATUS, version.schema.as_ref())?;

    let mut schema = catalog::base_props();
    let mut envelope = schema.properties.take().unwrap_or_default();

    let spec = envelope.remove(SPEC).unwrap_or_default();
    envelope.insert(
        SPEC.to_string(),
        overlay_field(spec, user_spec, (flavor.spec_props)(), RequiredMerge::Append),
    );

    let status = envelope.remove(STATUS).unwrap_or_default();
    envelope.insert(
        STATUS.to_string(),
        overlay_field(
            status,
            user_status,
            catalog::status_props(),
            RequiredMerge::Replace,
        ),
    );

    schema.properties = Some(envelope);

    Ok(CustomResourceDefinitionVersion {
        name: version.name.clone(),
        served: version.served,
        storage: version.referenceable,
        deprecated: version.deprecated.unwrap_or(false).then_some(true),
        deprecation_warning: version.deprecation_warning.clone(),
        additional_printer_columns: Some(
            version
                .additional_printer_columns
                .iter()
                .cloned()
                .chain((flavor.printer_columns)())
                .collect(),
        ),
        schema: Some(CustomResourceValidation {
            open_api_v3_schema: Some(schema),
        }),
        subresources: Some(CustomResourceSubresources {
            status: Some(CustomResourceSubresourceStatus(json!({}))),
            ..Default::default()
        }),
        ..Default::default()
    })
}

/// Apply the user's properties and then the framework's on top of an
/// envelope field.
fn overlay_field(
    mut field: JSONSchemaProps,
    user: FieldProps,
    framework: Properties,
    mode: RequiredMerge,
) -> JSONSchemaProps {
    let required: Vec<String> = match mode {
        RequiredMerge::Append => field
            .required
            .take()
            .unwrap_or_default()
            .into_iter()
            .chain(user.required)
            .collect(),
        RequiredMerge::Replace => user.required,
    };
    field.required = (!required.is_empty()).then_some(required);

    let properties = field.properties.take().unwrap_or_default();
    field.properties = Some(merge(merge(properties, user.properties), framework));
    field
}

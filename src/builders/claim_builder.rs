//! Composite resource claim CRD builder

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::ResourceExt;
use tracing::{debug, instrument};

use super::claim_names::validate_claim_names;
use super::version_builder::{build_crd, CLAIM};
use crate::crd::CompositeResourceDefinition;
use crate::Result;

/// Derive the namespaced CRD of the claim an XRD offers.
///
/// Fails without building anything when the claim names are missing or
/// collide with the composite names.
#[instrument(skip(xrd), fields(xrd = %xrd.name_any()))]
pub fn for_composite_resource_claim(
    xrd: &CompositeResourceDefinition,
) -> Result<CustomResourceDefinition> {
    let names = validate_claim_names(xrd)?.clone();
    let name = super::crd_name(&names.plural, &xrd.spec.group);

    let crd = build_crd(xrd, name, names, &CLAIM)?;
    debug!(
        kind = %crd.spec.names.kind,
        versions = crd.spec.versions.len(),
        "Derived claim CRD"
    );
    Ok(crd)
}

//! Composite resource CRD builder

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::ResourceExt;
use tracing::{debug, instrument};

use super::version_builder::{build_crd, COMPOSITE};
use crate::crd::CompositeResourceDefinition;
use crate::Result;

/// Derive the cluster-scoped CRD of the composite resource an XRD defines
#[instrument(skip(xrd), fields(xrd = %xrd.name_any()))]
pub fn for_composite_resource(
    xrd: &CompositeResourceDefinition,
) -> Result<CustomResourceDefinition> {
    let name = xrd
        .metadata
        .name
        .clone()
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| super::crd_name(&xrd.spec.names.plural, &xrd.spec.group));

    let crd = build_crd(xrd, name, xrd.spec.names.clone(), &COMPOSITE)?;
    debug!(
        kind = %crd.spec.names.kind,
        versions = crd.spec.versions.len(),
        "Derived composite resource CRD"
    );
    Ok(crd)
}

//! Validation of claim names against composite names

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinitionNames;

use crate::crd::CompositeResourceDefinition;
use crate::{Error, Result};

/// Validate that the XRD declares claim names that do not collide with its
/// composite names, and return them.
///
/// Singular and list kind are only compared when the claim sets them.
pub fn validate_claim_names(
    xrd: &CompositeResourceDefinition,
) -> Result<&CustomResourceDefinitionNames> {
    let claim = xrd
        .spec
        .claim_names
        .as_ref()
        .ok_or(Error::MissingClaimNames)?;
    let composite = &xrd.spec.names;

    if claim.kind == composite.kind {
        return Err(conflict("kind", &claim.kind));
    }

    if claim.plural == composite.plural {
        return Err(conflict("plural", &claim.plural));
    }

    if let Some(n) = non_empty(&claim.singular) {
        if Some(n) == composite.singular.as_deref() {
            return Err(conflict("singular", n));
        }
    }

    if let Some(n) = non_empty(&claim.list_kind) {
        if Some(n) == composite.list_kind.as_deref() {
            return Err(conflict("listKind", n));
        }
    }

    Ok(claim)
}

fn non_empty(name: &Option<String>) -> Option<&str> {
    name.as_deref().filter(|n| !n.is_empty())
}

fn conflict(field: &'static str, name: &str) -> Error {
    Error::ConflictingName {
        field,
        name: name.to_string(),
    }
}

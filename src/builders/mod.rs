//! Builders deriving composite and claim CRDs from an XRD

pub mod claim_builder;
pub mod claim_names;
pub mod composite_builder;
pub mod version_builder;

pub use claim_builder::for_composite_resource_claim;
pub use claim_names::validate_claim_names;
pub use composite_builder::for_composite_resource;

/// Conventional CRD name: `<plural>.<group>`
pub fn crd_name(plural: &str, group: &str) -> String {
    format!("{}.{}", plural, group)
}

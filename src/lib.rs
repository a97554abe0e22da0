//! Crossplane XRD to CRD generator
//!
//! Derives the cluster-scoped composite resource CRD and the namespaced claim
//! CRD from a CompositeResourceDefinition (XRD), merging the user's schema
//! with the fields, printer columns and names every composite and claim
//! carries.

pub mod builders;
pub mod crd;
pub mod error;
pub mod generator;
pub mod schema;

pub use error::{Error, Result};

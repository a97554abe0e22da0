//! Custom Resource Definitions read by the generator

mod composite_resource_definition;

pub use composite_resource_definition::*;

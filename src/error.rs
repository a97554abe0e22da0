//! Error types for CRD derivation and generation

use std::path::PathBuf;

use thiserror::Error;

/// Result type for the generator
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type for the generator
#[derive(Error, Debug)]
pub enum Error {
    /// The raw validation schema of a version could not be read as a JSON schema
    #[error("cannot get {field:?} properties from validation schema: cannot parse validation schema: {source}")]
    SchemaParse {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    /// The XRD declares no claim names
    #[error("invalid resource claim names: missing names")]
    MissingClaimNames,

    /// A claim name is identical to the matching composite name
    #[error("invalid resource claim names: {name:?} conflicts with composite resource name ({field})")]
    ConflictingName { field: &'static str, name: String },

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to (de)serialize {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid discovery pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}


//! Writing generated CRD manifests

use std::fs;
use std::path::{Path, PathBuf};

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;

use crate::{Error, Result};

/// File name a CRD is written to: `<group>_<plural>.yaml`
pub fn manifest_file_name(crd: &CustomResourceDefinition) -> String {
    format!("{}_{}.yaml", crd.spec.group, crd.spec.names.plural)
}

/// Render a CRD as a YAML manifest
pub fn render_crd(crd: &CustomResourceDefinition) -> Result<String> {
    serde_yaml::to_string(crd).map_err(|source| Error::Yaml {
        path: PathBuf::from(manifest_file_name(crd)),
        source,
    })
}

/// Write a CRD manifest into `output_dir`, creating it if needed.
/// Returns the path written.
pub fn write_crd(crd: &CustomResourceDefinition, output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|source| Error::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let path = output_dir.join(manifest_file_name(crd));
    let manifest = render_crd(crd)?;
    fs::write(&path, manifest).map_err(|source| Error::Io {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

//! Discovery and loading of XRD source documents

use std::fs;
use std::path::{Path, PathBuf};

use crate::crd::CompositeResourceDefinition;
use crate::{Error, Result};

/// Find files named `pattern` in the immediate subdirectories of `root`
pub fn find_paths_for_pattern(pattern: &str, root: &Path) -> Result<Vec<PathBuf>> {
    let root = glob::Pattern::escape(&root.to_string_lossy());
    let expr = Path::new(&root).join("*").join(pattern);

    let mut paths = glob::glob(&expr.to_string_lossy())?
        .map(|entry| {
            entry.map_err(|e| Error::Io {
                path: e.path().to_path_buf(),
                source: e.into(),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    paths.sort();
    Ok(paths)
}

/// Read a CompositeResourceDefinition from a YAML or JSON file
pub fn load_xrd(path: &Path) -> Result<CompositeResourceDefinition> {
    let raw = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_yaml::from_str(&raw).map_err(|source| Error::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

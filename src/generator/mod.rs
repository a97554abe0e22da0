//! Generation runs: discover XRDs, derive their CRDs, write the manifests

pub mod loader;
pub mod writer;

use std::path::{Path, PathBuf};

use kube::ResourceExt;
use tracing::{debug, info, instrument};

use crate::builders::{for_composite_resource, for_composite_resource_claim};
use crate::{Error, Result};

pub use loader::{find_paths_for_pattern, load_xrd};
pub use writer::{render_crd, write_crd};

/// File names searched for by default
pub const DEFAULT_PATTERNS: [&str; 2] = ["xrd.yaml", "test.yaml"];

/// Directory, relative to the root, that manifests are written to by default
pub const DEFAULT_OUTPUT_DIR: &str = "crds";

/// Settings of a generation run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory whose immediate subdirectories hold XRD files
    pub root: PathBuf,
    /// File names to look for, processed in order
    pub patterns: Vec<String>,
    /// Directory the CRD manifests are written to
    pub output_dir: PathBuf,
}

impl GeneratorConfig {
    /// Default settings rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            output_dir: root.join(DEFAULT_OUTPUT_DIR),
            patterns: DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect(),
            root,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

/// Manifests written by a run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Composite resource CRDs
    pub composites: Vec<PathBuf>,
    /// Claim CRDs
    pub claims: Vec<PathBuf>,
    /// XRDs that offer no claim
    pub without_claim: Vec<PathBuf>,
}

/// Drives generation over a directory tree
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate CRDs for every XRD matching the configured patterns.
    ///
    /// Stops at the first error.
    pub fn run(&self) -> Result<GenerationReport> {
        let mut report = GenerationReport::default();

        for pattern in &self.config.patterns {
            let paths = find_paths_for_pattern(pattern, &self.config.root)?;
            info!(pattern = %pattern, count = paths.len(), "Discovered XRDs");

            for path in paths {
                self.generate(&path, &mut report)?;
            }
        }

        Ok(report)
    }

    /// Generate the composite CRD and, if offered, the claim CRD of one XRD.
    ///
    /// The composite manifest is written before the claim is derived, so a
    /// claim failure leaves it in place.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn generate(&self, path: &Path, report: &mut GenerationReport) -> Result<()> {
        let xrd = load_xrd(path)?;
        info!("Generating CRDs for XRD {}", xrd.name_any());

        let composite = for_composite_resource(&xrd)?;
        let written = write_crd(&composite, &self.config.output_dir)?;
        info!("Wrote composite resource CRD {}", written.display());
        report.composites.push(written);

        match for_composite_resource_claim(&xrd) {
            Ok(claim) => {
                let written = write_crd(&claim, &self.config.output_dir)?;
                info!("Wrote claim CRD {}", written.display());
                report.claims.push(written);
            }
            Err(Error::MissingClaimNames) => {
                debug!("XRD offers no claim, skipping claim CRD");
                report.without_claim.push(path.to_path_buf());
            }
            Err(e) => return Err(e),
        }

        Ok(())
    }
}

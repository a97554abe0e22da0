//! xrd-crdgen
//!
//! Scans the subdirectories of a root directory for XRD files and writes the
//! composite and claim CRDs derived from each one.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use xrd_crdgen::generator::{Generator, GeneratorConfig, DEFAULT_PATTERNS};

#[derive(Parser, Debug)]
#[command(name = "xrd-crdgen")]
#[command(version)]
#[command(about = "Generate composite and claim CRDs from Crossplane XRDs", long_about = None)]
struct Cli {
    /// Directory whose subdirectories contain XRD files
    #[arg(long, env = "XRD_CRDGEN_ROOT", default_value = ".")]
    root: PathBuf,

    /// XRD file name to look for (repeatable)
    #[arg(short, long = "pattern", default_values_t = DEFAULT_PATTERNS.map(String::from))]
    patterns: Vec<String>,

    /// Output directory for CRD manifests (defaults to <root>/crds)
    #[arg(short, long, env = "XRD_CRDGEN_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Output logs in JSON format
    #[arg(long)]
    log_json: bool,
}

impl Cli {
    fn into_config(self) -> GeneratorConfig {
        let mut config = GeneratorConfig::new(self.root);
        config.patterns = self.patterns;
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let generator = Generator::new(cli.into_config());
    info!(
        root = %generator.config().root.display(),
        output_dir = %generator.config().output_dir.display(),
        "Starting xrd-crdgen"
    );

    let report = generator.run()?;

    info!(
        composites = report.composites.len(),
        claims = report.claims.len(),
        without_claim = report.without_claim.len(),
        "CRD generation complete"
    );
    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(json: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,xrd_crdgen=debug"));

    let registry = tracing_subscriber::registry().with(env_filter);
    let fmt = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    if json {
        registry.with(fmt.json()).init();
    } else {
        registry.with(fmt).init();
    }
}

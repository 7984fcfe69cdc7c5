//! Command-line front end: load a document, generate per tag, write the
//! artifact pair under `<out-dir>/<tag>/`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use swagts_core::{Document, generate_for_tag};
use tracing::{debug, info};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(
    name = "swagts",
    version,
    about = "Generate typed TypeScript axios clients from OpenAPI documents"
)]
struct Cli {
    /// Path to the OpenAPI JSON document
    spec: PathBuf,

    /// Directory to write artifacts into, one subdirectory per tag
    #[arg(long, default_value = "generated")]
    out_dir: PathBuf,

    /// Generate only the given tag (repeatable); defaults to every declared tag
    #[arg(long = "tag")]
    tags: Vec<String>,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let json = std::fs::read_to_string(&cli.spec)
        .map_err(|err| format!("failed to read {}: {err}", cli.spec.display()))?;
    let document = Document::from_json(&json).map_err(|err| err.to_string())?;

    let tags: Vec<String> = if cli.tags.is_empty() {
        document.tag_names().into_iter().map(String::from).collect()
    } else {
        cli.tags.clone()
    };

    for tag in &tags {
        let artifacts = generate_for_tag(&document, tag)
            .map_err(|err| format!("generation failed for tag `{tag}`: {err}"))?;

        // Nothing is written for a tag until its generation fully succeeded.
        let tag_dir = cli.out_dir.join(tag);
        std::fs::create_dir_all(&tag_dir)
            .map_err(|err| format!("failed to create {}: {err}", tag_dir.display()))?;

        let types_path = tag_dir.join("types.gen.ts");
        debug!(path = %types_path.display(), "writing type declarations");
        std::fs::write(&types_path, artifacts.types_document())
            .map_err(|err| format!("failed to write {}: {err}", types_path.display()))?;

        let requests_path = tag_dir.join("http.gen.ts");
        debug!(path = %requests_path.display(), "writing request functions");
        std::fs::write(&requests_path, artifacts.requests_document())
            .map_err(|err| format!("failed to write {}: {err}", requests_path.display()))?;

        info!(tag, dir = %tag_dir.display(), "wrote artifacts");
    }
    Ok(())
}

fn init_tracing() {
    // SWAGTS_LOG controls log level: "trace", "debug", "info", "warn", "error"
    // or a full tracing filter spec like "swagts_core=debug"
    let filter = match std::env::var("SWAGTS_LOG") {
        Ok(level) if is_plain_level(&level) => {
            format!("swagts={level},swagts_core={level}")
        }
        Ok(spec) => spec,
        Err(_) => "swagts=info,swagts_core=info".to_string(),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn is_plain_level(value: &str) -> bool {
    matches!(value, "trace" | "debug" | "info" | "warn" | "error")
}

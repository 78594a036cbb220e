use std::fs;
use std::path::PathBuf;

use optable_lib::EmitConfig;
use optable_lib::emit::{DEFAULT_TEMPLATE, emit};
use tracing::info;

use super::run_common::{CommandError, compile_options, compile_spec, exit_with};
use super::spec_loader::{SpecInput, load_spec};

pub struct GenerateArgs {
    pub input: SpecInput,
    pub fallback: Option<String>,
    pub template: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub primary_marker: Option<String>,
    pub prefixed_marker: Option<String>,
    pub color: bool,
}

pub fn run(args: GenerateArgs) {
    match execute(&args) {
        Ok(Some(out)) => print!("{out}"),
        Ok(None) => {}
        Err(err) => exit_with(err),
    }
}

/// The filled template, or `None` once it has been written to `args.output`.
pub fn execute(args: &GenerateArgs) -> Result<Option<String>, CommandError> {
    let spec = load_spec(&args.input)?;
    let options = compile_options(args.fallback.as_deref(), false);
    let compilation = compile_spec(&spec, options, args.color)?;

    let template = match &args.template {
        Some(path) => fs::read_to_string(path).map_err(|source| CommandError::Template {
            path: path.clone(),
            source,
        })?,
        None => DEFAULT_TEMPLATE.to_string(),
    };

    let mut config = EmitConfig::new();
    if let Some(marker) = &args.primary_marker {
        config = config.primary_placeholder(marker.as_str());
    }
    if let Some(marker) = &args.prefixed_marker {
        config = config.prefixed_placeholder(marker.as_str());
    }

    let out = emit(&template, &compilation, &config)?;

    let Some(path) = &args.output else {
        return Ok(Some(out));
    };
    fs::write(path, &out).map_err(|source| CommandError::Write {
        path: path.clone(),
        source,
    })?;
    info!(
        target: "optable::cli",
        path = %path.display(),
        bytes = out.len(),
        "wrote generated tables"
    );
    Ok(None)
}

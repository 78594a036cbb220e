//! Error type and compile step shared by the commands that read a map.

use std::io;
use std::path::PathBuf;

use optable_core::PatternFormatError;
use optable_lib::{Compilation, CompileOptions, Diagnostics, EmitError, TableCompiler};

use super::spec_loader::{LoadError, LoadedSpec};

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Diagnostics already rendered against their source.
    #[error("{0}")]
    Invalid(String),

    #[error(transparent)]
    Pattern(#[from] PatternFormatError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("failed to read template '{}': {source}", .path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn compile_options(fallback: Option<&str>, check_overlaps: bool) -> CompileOptions {
    let options = CompileOptions::new().check_overlaps(check_overlaps);
    match fallback {
        Some(name) => options.default_fallback(name),
        None => options,
    }
}

pub fn render_diagnostics(diagnostics: &Diagnostics, spec: &LoadedSpec, color: bool) -> String {
    diagnostics
        .printer(&spec.text)
        .path(&spec.name)
        .colored(color)
        .render()
}

pub fn compile_spec(
    spec: &LoadedSpec,
    options: CompileOptions,
    color: bool,
) -> Result<Compilation, CommandError> {
    TableCompiler::new(&spec.text)
        .options(options)
        .compile()
        .map_err(|optable_lib::Error::InvalidSpec(diagnostics)| {
            CommandError::Invalid(render_diagnostics(&diagnostics, spec, color))
        })
}

/// Report `err` on stderr and exit with status 1.
pub fn exit_with(err: CommandError) -> ! {
    match err {
        CommandError::Invalid(rendered) => eprintln!("{rendered}"),
        other => eprintln!("error: {other}"),
    }
    std::process::exit(1);
}

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use optable_lib::presets::{self, PRESET_NAMES};

/// Where the opcode map comes from. A preset wins over a path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpecInput {
    pub path: Option<PathBuf>,
    pub preset: Option<String>,
}

impl SpecInput {
    pub fn new(path: Option<PathBuf>, preset: Option<String>) -> Self {
        Self { path, preset }
    }
}

/// Opcode map text plus the name diagnostics are reported under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedSpec {
    pub name: String,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("opcode map is required: pass a file, `-` for stdin, or --preset")]
    Missing,

    #[error("unknown preset '{name}' (available: {})", PRESET_NAMES.join(", "))]
    UnknownPreset { name: String },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn load_spec(input: &SpecInput) -> Result<LoadedSpec, LoadError> {
    if let Some(name) = &input.preset {
        let text = presets::preset(name).ok_or_else(|| LoadError::UnknownPreset {
            name: name.clone(),
        })?;
        return Ok(LoadedSpec {
            name: format!("<preset:{name}>"),
            text: text.to_string(),
        });
    }

    match &input.path {
        Some(path) if path.as_os_str() == "-" => load_stdin(),
        Some(path) => load_file(path),
        None => Err(LoadError::Missing),
    }
}

fn load_stdin() -> Result<LoadedSpec, LoadError> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(LoadError::Stdin)?;
    Ok(LoadedSpec {
        name: "<stdin>".to_string(),
        text,
    })
}

fn load_file(path: &Path) -> Result<LoadedSpec, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(LoadedSpec {
        name: path.to_string_lossy().into_owned(),
        text,
    })
}

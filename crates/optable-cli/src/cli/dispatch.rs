//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the relevant fields
//! - `Into<*Args>` impls bridge dispatch and command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use optable_core::OpcodeSpace;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::{DumpArgs, DumpFormat};
use crate::commands::expand::ExpandArgs;
use crate::commands::generate::GenerateArgs;
use crate::commands::spec_loader::SpecInput;

pub struct CheckParams {
    pub spec_path: Option<PathBuf>,
    pub preset: Option<String>,
    pub fallback: Option<String>,
    pub overlaps: bool,
    pub strict: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            spec_path: m.get_one::<PathBuf>("spec_path").cloned(),
            preset: m.get_one::<String>("preset").cloned(),
            fallback: m.get_one::<String>("fallback").cloned(),
            overlaps: m.get_flag("overlaps"),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: SpecInput::new(p.spec_path, p.preset),
            fallback: p.fallback,
            overlaps: p.overlaps || p.strict,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub spec_path: Option<PathBuf>,
    pub preset: Option<String>,
    pub fallback: Option<String>,
    pub spaces: Vec<OpcodeSpace>,
    pub format: DumpFormat,
    pub summary: bool,
    pub compact: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            spec_path: m.get_one::<PathBuf>("spec_path").cloned(),
            preset: m.get_one::<String>("preset").cloned(),
            fallback: m.get_one::<String>("fallback").cloned(),
            spaces: parse_spaces(m),
            format: parse_format(m),
            summary: m.get_flag("summary"),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            input: SpecInput::new(p.spec_path, p.preset),
            fallback: p.fallback,
            spaces: p.spaces,
            format: p.format,
            summary: p.summary,
            compact: p.compact,
            color: p.color.should_colorize(),
        }
    }
}

pub struct GenerateParams {
    pub spec_path: Option<PathBuf>,
    pub preset: Option<String>,
    pub fallback: Option<String>,
    pub template: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub primary_marker: Option<String>,
    pub prefixed_marker: Option<String>,
    pub color: ColorChoice,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            spec_path: m.get_one::<PathBuf>("spec_path").cloned(),
            preset: m.get_one::<String>("preset").cloned(),
            fallback: m.get_one::<String>("fallback").cloned(),
            template: m.get_one::<PathBuf>("template").cloned(),
            output: m.get_one::<PathBuf>("output").cloned(),
            primary_marker: m.get_one::<String>("primary_marker").cloned(),
            prefixed_marker: m.get_one::<String>("prefixed_marker").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            input: SpecInput::new(p.spec_path, p.preset),
            fallback: p.fallback,
            template: p.template,
            output: p.output,
            primary_marker: p.primary_marker,
            prefixed_marker: p.prefixed_marker,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ExpandParams {
    pub pattern: String,
    pub color: ColorChoice,
}

impl ExpandParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: m.get_one::<String>("pattern").cloned().unwrap_or_default(),
            color: parse_color(m),
        }
    }
}

impl From<ExpandParams> for ExpandArgs {
    fn from(p: ExpandParams) -> Self {
        Self {
            pattern: p.pattern,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_spaces(m: &ArgMatches) -> Vec<OpcodeSpace> {
    match m
        .get_one::<String>("space")
        .and_then(|s| OpcodeSpace::from_name(s))
    {
        Some(space) => vec![space],
        None => OpcodeSpace::ALL.to_vec(),
    }
}

fn parse_format(m: &ArgMatches) -> DumpFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => DumpFormat::Json,
        _ => DumpFormat::Text,
    }
}

//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Opcode map file, or `-` for stdin (positional).
pub fn spec_path_arg() -> Arg {
    Arg::new("spec_path")
        .value_name("SPEC")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("preset")
        .help("Opcode map file (.opmap), or - for stdin")
}

/// Bundled opcode map (--preset).
pub fn preset_arg() -> Arg {
    Arg::new("preset")
        .long("preset")
        .value_name("NAME")
        .value_parser(optable_lib::presets::PRESET_NAMES.to_vec())
        .help("Use a bundled opcode map instead of a file")
}

/// Fallback handler when the map names none (--fallback).
pub fn fallback_arg() -> Arg {
    Arg::new("fallback")
        .long("fallback")
        .value_name("HANDLER")
        .help("Fallback handler for spaces whose map names none")
}

/// Report overlapping entries (--overlaps).
pub fn overlaps_arg() -> Arg {
    Arg::new("overlaps")
        .long("overlaps")
        .action(ArgAction::SetTrue)
        .help("Warn about entries overridden by later entries")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors (implies --overlaps)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Opcode space selection (--space).
pub fn space_arg() -> Arg {
    Arg::new("space")
        .long("space")
        .value_name("SPACE")
        .default_value("all")
        .value_parser(["primary", "prefixed", "all"])
        .help("Opcode space to show")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "json"])
        .help("Output format")
}

/// Per-handler counts instead of the full table (--summary).
pub fn summary_arg() -> Arg {
    Arg::new("summary")
        .long("summary")
        .action(ArgAction::SetTrue)
        .help("Show opcode counts per handler instead of every opcode")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON")
}

/// Template file (-t/--template).
pub fn template_arg() -> Arg {
    Arg::new("template")
        .short('t')
        .long("template")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Template with table placeholders (default: built-in C header)")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Primary table placeholder (--primary-marker).
pub fn primary_marker_arg() -> Arg {
    Arg::new("primary_marker")
        .long("primary-marker")
        .value_name("TEXT")
        .help("Placeholder replaced by the primary table")
}

/// Prefixed table placeholder (--prefixed-marker).
pub fn prefixed_marker_arg() -> Arg {
    Arg::new("prefixed_marker")
        .long("prefixed-marker")
        .value_name("TEXT")
        .help("Placeholder replaced by the prefixed table")
}

/// Bit pattern to expand (positional).
pub fn pattern_arg() -> Arg {
    Arg::new("pattern")
        .value_name("PATTERN")
        .required(true)
        .help("8-symbol bit pattern, e.g. 00xx_0001")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .global(true)
        .help("Log verbosity (-v for debug, -vv for trace)")
}

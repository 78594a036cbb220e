//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Input and compilation args shared by every command that reads a map.
fn with_spec_args(cmd: Command) -> Command {
    cmd.arg(spec_path_arg())
        .arg(preset_arg())
        .arg(fallback_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("optable")
        .about("Compile wildcard opcode maps into 256-entry dispatch tables")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(generate_command())
        .subcommand(expand_command())
}

/// Validate an opcode map.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate an opcode map")
        .override_usage(
            "\
  optable check <SPEC>
  optable check --preset <NAME>",
        )
        .after_help(
            r#"EXAMPLES:
  optable check cpu.opmap               # errors only
  optable check cpu.opmap --overlaps    # also warn about overridden entries
  optable check cpu.opmap --strict      # fail on warnings
  cat cpu.opmap | optable check -       # read from stdin"#,
        )
        .arg(overlaps_arg())
        .arg(strict_arg())
        .arg(color_arg());

    with_spec_args(cmd)
}

/// Show compiled tables.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show compiled tables")
        .override_usage(
            "\
  optable dump <SPEC> [--space <SPACE>] [--format <FORMAT>]
  optable dump --preset <NAME> [--summary]",
        )
        .after_help(
            r#"EXAMPLES:
  optable dump cpu.opmap                      # every opcode of both tables
  optable dump cpu.opmap --space prefixed     # one table
  optable dump --preset sm83 --summary        # opcode count per handler
  optable dump cpu.opmap --format json        # machine-readable"#,
        )
        .arg(space_arg())
        .arg(format_arg())
        .arg(summary_arg())
        .arg(compact_arg())
        .arg(color_arg());

    with_spec_args(cmd)
}

/// Fill a template with the compiled tables.
pub fn generate_command() -> Command {
    let cmd = Command::new("generate")
        .about("Fill a template with the compiled tables")
        .override_usage(
            "\
  optable generate <SPEC> [-t <TEMPLATE>] [-o <FILE>]
  optable generate --preset <NAME> [-o <FILE>]",
        )
        .after_help(
            r#"EXAMPLES:
  optable generate cpu.opmap -o optable.h               # built-in C header
  optable generate cpu.opmap -t template_optable.h      # custom template
  optable generate cpu.opmap -t t.rs --primary-marker '// PRIMARY'"#,
        )
        .arg(template_arg())
        .arg(output_file_arg())
        .arg(primary_marker_arg())
        .arg(prefixed_marker_arg())
        .arg(color_arg());

    with_spec_args(cmd)
}

/// List the opcodes a single pattern covers.
pub fn expand_command() -> Command {
    Command::new("expand")
        .about("List the opcodes a bit pattern covers")
        .after_help(
            r#"EXAMPLES:
  optable expand 00xx_0001      # 0x01 0x11 0x21 0x31
  optable expand 01xx_xyyy      # 64 opcodes"#,
        )
        .arg(pattern_arg())
        .arg(color_arg())
}

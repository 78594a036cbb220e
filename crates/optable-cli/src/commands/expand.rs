use std::fmt::Write;

use optable_core::BitPattern;
use optable_lib::Colors;

use super::run_common::{CommandError, exit_with};

pub struct ExpandArgs {
    pub pattern: String,
    pub color: bool,
}

pub fn run(args: ExpandArgs) {
    match execute(&args) {
        Ok(out) => print!("{out}"),
        Err(err) => exit_with(err),
    }
}

/// One line per covered opcode: `0x11  00010001`.
pub fn execute(args: &ExpandArgs) -> Result<String, CommandError> {
    let pattern = BitPattern::parse(&args.pattern)?;
    let Colors {
        bits, muted, reset, ..
    } = Colors::new(args.color);

    let mut out = String::new();
    for byte in pattern.expand() {
        writeln!(out, "{muted}0x{byte:02x}{reset}  {bits}{byte:08b}{reset}")
            .expect("String write never fails");
    }
    Ok(out)
}

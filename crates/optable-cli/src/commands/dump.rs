use optable_core::OpcodeSpace;
use optable_lib::Colors;
use optable_lib::dump::{dump_json, dump_text};

use super::run_common::{CommandError, compile_options, compile_spec, exit_with};
use super::spec_loader::{SpecInput, load_spec};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DumpFormat {
    #[default]
    Text,
    Json,
}

pub struct DumpArgs {
    pub input: SpecInput,
    pub fallback: Option<String>,
    pub spaces: Vec<OpcodeSpace>,
    pub format: DumpFormat,
    pub summary: bool,
    pub compact: bool,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    match execute(&args) {
        Ok(out) => print!("{out}"),
        Err(err) => exit_with(err),
    }
}

pub fn execute(args: &DumpArgs) -> Result<String, CommandError> {
    let spec = load_spec(&args.input)?;
    let options = compile_options(args.fallback.as_deref(), false);
    let compilation = compile_spec(&spec, options, args.color)?;

    match args.format {
        DumpFormat::Text => Ok(dump_text(
            &compilation,
            &args.spaces,
            args.summary,
            Colors::new(args.color),
        )),
        DumpFormat::Json => {
            let mut out = dump_json(&compilation, &args.spaces, !args.compact)?;
            out.push('\n');
            Ok(out)
        }
    }
}

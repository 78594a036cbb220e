use super::run_common::{
    CommandError, compile_options, compile_spec, exit_with, render_diagnostics,
};
use super::spec_loader::{SpecInput, load_spec};

pub struct CheckArgs {
    pub input: SpecInput,
    pub fallback: Option<String>,
    pub overlaps: bool,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    match execute(&args) {
        // Silent on success (like cargo check)
        Ok(None) => {}
        Ok(Some(warnings)) => eprintln!("{warnings}"),
        Err(err) => exit_with(err),
    }
}

/// Rendered warnings, if any. In strict mode warnings fail the check.
pub fn execute(args: &CheckArgs) -> Result<Option<String>, CommandError> {
    let spec = load_spec(&args.input)?;
    let options = compile_options(args.fallback.as_deref(), args.overlaps);
    let compilation = compile_spec(&spec, options, args.color)?;

    if compilation.warnings.is_empty() {
        return Ok(None);
    }

    let rendered = render_diagnostics(&compilation.warnings, &spec, args.color);
    if args.strict {
        return Err(CommandError::Invalid(rendered));
    }
    Ok(Some(rendered))
}

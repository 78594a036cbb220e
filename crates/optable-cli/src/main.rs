mod cli;
mod commands;

use cli::{CheckParams, DumpParams, ExpandParams, GenerateParams, build_cli};
use tracing::Level;

fn main() {
    let matches = build_cli().get_matches();

    if let Some((_, m)) = matches.subcommand() {
        init_tracing(m.get_count("verbose"));
    }

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("generate", m)) => {
            let params = GenerateParams::from_matches(m);
            commands::generate::run(params.into());
        }
        Some(("expand", m)) => {
            let params = ExpandParams::from_matches(m);
            commands::expand::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Logs go to stderr so they never mix with generated output.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .without_time()
        .init();
}

mod error;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "keyswitch-generator", version, about = "Generate keyswitch kicad library.")]
struct Cli {
    /// Output directory for the `.pretty` libraries
    #[arg(short, long, value_name = "DIR", default_value = "./output")]
    output: PathBuf,

    /// YAML library configuration (keycaps, spacing, 3D model path)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Remove the output directory before writing
    #[arg(long)]
    clean: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            // help and version go to stdout and are not failures
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let err = CliError::usage(err.to_string());
            eprint!("{err}");
            return ExitCode::from(&err);
        }
    };
    init_logging(cli.debug);

    match render::run(cli.output, cli.config.as_deref(), cli.clean) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(&err)
        }
    }
}

use clap::{ArgAction, Parser, Subcommand};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use rn_grpc::{files_from_json, generate_all, GenError, GeneratorOptions, UnsupportedPolicy};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod plugin;
mod sinks;

use sinks::DirSink;

#[derive(Parser)]
#[command(name = "protoc-gen-rn-grpc")]
#[command(about = "Generate a typed React Native gRPC module from protobuf schemas", long_about = None)]
#[command(version)]
struct Cli {
    /// Verbosity on stderr (-v, -vv, -vvv). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Without a subcommand, run as a protoc plugin on stdin/stdout
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate from a JSON array of schema files
    Gen {
        /// Input JSON schema file
        #[arg(short, long)]
        input: PathBuf,

        /// Directory to write the generated module into
        #[arg(short, long)]
        out_dir: PathBuf,

        /// Output file name (defaults to `grpcModule.ts`)
        #[arg(long)]
        file_name: Option<String>,

        /// What to do with fields of unsupported kinds: omit, fail or opaque
        #[arg(long)]
        unsupported: Option<UnsupportedPolicy>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // stdout carries the plugin response
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), GenError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        None => {
            let mut input = Vec::new();
            io::stdin().read_to_end(&mut input)?;
            let output = plugin::run(&input)?;
            io::stdout().write_all(&output)?;
            Ok(())
        }

        Some(Commands::Gen { input, out_dir, file_name, unsupported }) => {
            let text = fs::read_to_string(&input)?;
            let files = files_from_json(&text)?;

            let mut options = GeneratorOptions::default();
            if let Some(name) = file_name {
                options.file_name = name;
            }
            if let Some(policy) = unsupported {
                options.unsupported = policy;
            }

            generate_all(&files, &options, DirSink::new(&out_dir))?;
            info!(
                "Generated {} from {}",
                out_dir.join(&options.file_name).display(),
                input.display()
            );
            Ok(())
        }
    }
}

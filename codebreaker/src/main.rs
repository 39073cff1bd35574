mod shift;

use clap::{Parser, Subcommand};
use shift::{load_ciphertext, run as run_shift_attack, ShiftAttackOptions};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "codebreaker")]
#[command(about = "Key-space attacks on classical ciphers")]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Try all 26 shift-cipher keys
    Shift {
        /// Ciphertext to attack (reads --input or stdin when omitted)
        ciphertext: Option<String>,

        /// Read the ciphertext from a file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Only show the candidate for this key
        #[arg(long)]
        key: Option<u8>,

        /// Print candidates as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::new(level))
        .init();

    match cli.command {
        Commands::Shift {
            ciphertext,
            input,
            key,
            json,
        } => {
            let ciphertext = load_ciphertext(ciphertext.as_deref(), input.as_deref())?;
            info!(chars = ciphertext.len(), "starting shift brute force");
            let options = ShiftAttackOptions { json, key };
            let report = run_shift_attack(&ciphertext, &options)?;
            print!("{}", report);
        }
    }

    Ok(())
}

use cipherkit::cli::{
    read_input, run_keygen, run_playfair, run_shift, run_substitution, run_vigenere, show_square,
    KeygenOptions, PlayfairOptions, ShiftOptions, SubstitutionOptions, VigenereOptions,
};
use cipherkit::options::{Direction, OutputFormat};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

/// Version info from build.rs
const VERSION: &str = env!("CIPHERKIT_VERSION");
const BUILD: &str = env!("CIPHERKIT_BUILD");
const PROFILE: &str = env!("CIPHERKIT_PROFILE");
const GIT_HASH: &str = env!("CIPHERKIT_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH)
    })
}

#[derive(Parser)]
#[command(name = "cipherkit")]
#[command(author, about = "Classical ciphers: Playfair, shift, substitution and Vigenere", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Where the text comes from and how the result is printed
#[derive(Args)]
struct InputArgs {
    /// Text to transform (reads --input or stdin when omitted)
    text: Option<String>,

    /// Read the text from a file
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "text", value_parser = parse_format)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Playfair digraph cipher
    #[command(alias = "p")]
    Playfair {
        /// encrypt or decrypt
        #[arg(value_parser = parse_direction)]
        direction: Direction,

        /// Keyword for the key square (letters only)
        #[arg(short, long, required = true)]
        keyword: String,

        #[command(flatten)]
        io: InputArgs,
    },

    /// Print the Playfair key square for a keyword
    Square {
        /// Keyword for the key square (letters only)
        #[arg(short, long, required = true)]
        keyword: String,
    },

    /// Shift cipher (3 = Caesar, 13 = ROT13)
    #[command(alias = "s")]
    Shift {
        /// encrypt or decrypt
        #[arg(value_parser = parse_direction)]
        direction: Direction,

        /// Shift between 0 and 26
        #[arg(long, default_value = "3", allow_hyphen_values = true)]
        shift: i64,

        #[command(flatten)]
        io: InputArgs,
    },

    /// Monoalphabetic substitution cipher
    #[command(alias = "sub")]
    Substitution {
        /// encrypt or decrypt
        #[arg(value_parser = parse_direction)]
        direction: Direction,

        /// 26-letter permutation, e.g. qwertyuiopasdfghjklzxcvbnm
        #[arg(long)]
        key: Option<String>,

        /// Derive the permutation from a passphrase
        #[arg(long, conflicts_with = "key")]
        passphrase: Option<String>,

        #[command(flatten)]
        io: InputArgs,
    },

    /// Generate a substitution permutation
    Keygen {
        /// Seed for a reproducible permutation
        #[arg(long)]
        seed: Option<u64>,

        /// Derive the permutation from a passphrase
        #[arg(long, conflicts_with = "seed")]
        passphrase: Option<String>,

        /// Output format
        #[arg(long, default_value = "text", value_parser = parse_format)]
        format: OutputFormat,
    },

    /// Vigenere running-key cipher
    #[command(alias = "v")]
    Vigenere {
        /// encrypt or decrypt
        #[arg(value_parser = parse_direction)]
        direction: Direction,

        /// Key (letters only)
        #[arg(short, long, required = true)]
        key: String,

        #[command(flatten)]
        io: InputArgs,
    },
}

fn parse_direction(s: &str) -> Result<Direction, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::new(level))
        .init();
}

fn read(io: &InputArgs) -> cipherkit::Result<String> {
    read_input(io.text.as_deref(), io.input.as_deref())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("cipherkit {}", get_version());
        return ExitCode::SUCCESS;
    }

    init_logging(cli.verbose);

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            if let Err(e) = Cli::command().print_help() {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Playfair {
            direction,
            keyword,
            io,
        } => read(&io).and_then(|text| {
            let options = PlayfairOptions {
                keyword,
                direction,
                format: io.format,
            };
            run_playfair(&text, &options)
        }),

        Commands::Square { keyword } => show_square(&keyword),

        Commands::Shift {
            direction,
            shift,
            io,
        } => read(&io).and_then(|text| {
            let options = ShiftOptions {
                shift,
                direction,
                format: io.format,
            };
            run_shift(&text, &options)
        }),

        Commands::Substitution {
            direction,
            key,
            passphrase,
            io,
        } => read(&io).and_then(|text| {
            let options = SubstitutionOptions {
                key,
                passphrase,
                direction,
                format: io.format,
            };
            run_substitution(&text, &options)
        }),

        Commands::Keygen {
            seed,
            passphrase,
            format,
        } => run_keygen(&KeygenOptions {
            seed,
            passphrase,
            format,
        }),

        Commands::Vigenere { direction, key, io } => read(&io).and_then(|text| {
            let options = VigenereOptions {
                key,
                direction,
                format: io.format,
            };
            run_vigenere(&text, &options)
        }),
    };

    match result {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(invalid_input = e.is_invalid_input(), "command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

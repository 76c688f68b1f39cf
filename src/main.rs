use clap::{Parser, Subcommand};
use rsacrypt::cli::{
    decrypt_file, encrypt_file, find_prime, generate_key_pair, render_keys, show_info,
    DecryptOptions, EncryptOptions,
};
use rsacrypt::file::WriteMode;
use rsacrypt::keygen::{PrivateKey, PublicKey};
use rsacrypt::Word;
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("RSACRYPT_VERSION");
const PROFILE: &str = env!("RSACRYPT_BUILD_PROFILE");
const GIT_HASH: &str = env!("RSACRYPT_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build ({})", PROFILE, VERSION, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "rsacrypt")]
#[command(author, about = "Fixed-width 32-bit RSA key generation and file encryption", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a prime number, starting from START
    #[command(alias = "p")]
    FindPrime {
        /// Number to start testing from
        start: Word,
    },

    /// Generate keys from primes P and Q
    #[command(alias = "g")]
    GenerateKeys {
        /// First prime
        p: Word,

        /// Second prime
        q: Word,

        /// Print the key pair as JSON
        #[arg(long)]
        json: bool,
    },

    /// Encrypt FILE in place with the public key pair E and N
    #[command(alias = "e")]
    Encrypt {
        /// Public exponent
        e: Word,

        /// Modulus
        n: Word,

        /// File to encrypt
        file: PathBuf,

        /// Replace the file through a temporary file and rename
        #[arg(long)]
        atomic: bool,
    },

    /// Decrypt FILE in place with the private key pair D and N
    #[command(alias = "d")]
    Decrypt {
        /// Private exponent
        d: Word,

        /// Modulus
        n: Word,

        /// File to decrypt
        file: PathBuf,

        /// Replace the file through a temporary file and rename
        #[arg(long)]
        atomic: bool,
    },

    /// Show information about an encrypted file
    #[command(alias = "i")]
    Info {
        /// Encrypted file to inspect
        file: PathBuf,

        /// Modulus used to encrypt the file
        #[arg(long)]
        modulus: Option<Word>,
    },
}

fn write_mode(atomic: bool) -> WriteMode {
    if atomic {
        WriteMode::Atomic
    } else {
        WriteMode::InPlace
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help is not a failure, bad arguments are
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Handle --version flag
    if cli.version {
        println!("rsacrypt {}", get_version());
        return ExitCode::SUCCESS;
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            let _ = Cli::command().print_help();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::FindPrime { start } => {
            let mut stdout = std::io::stdout().lock();
            find_prime(start, &mut stdout).map(|_| ())
        }

        Commands::GenerateKeys { p, q, json } => {
            generate_key_pair(p, q).and_then(|(keys, warnings)| {
                for warning in warnings {
                    eprintln!("Warning: {}", warning);
                }
                println!("{}", render_keys(&keys, json)?);
                Ok(())
            })
        }

        Commands::Encrypt { e, n, file, atomic } => {
            let options = EncryptOptions {
                write_mode: write_mode(atomic),
            };

            match encrypt_file(&file, &PublicKey { e, n }, &options) {
                Ok(summary) => {
                    println!(
                        "Encrypted {}: {} bytes -> {} bytes ({} blocks)",
                        file.display(),
                        summary.input_bytes,
                        summary.output_bytes,
                        summary.blocks
                    );
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Decrypt { d, n, file, atomic } => {
            let options = DecryptOptions {
                write_mode: write_mode(atomic),
            };

            match decrypt_file(&file, &PrivateKey { d, n }, &options) {
                Ok(summary) => {
                    println!(
                        "Decrypted {}: {} bytes -> {} bytes ({} blocks)",
                        file.display(),
                        summary.input_bytes,
                        summary.output_bytes,
                        summary.blocks
                    );
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Info { file, modulus } => match show_info(&file, modulus) {
            Ok(info) => {
                print!("{}", info);
                Ok(())
            }
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

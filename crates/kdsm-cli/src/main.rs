//! KDSM command-line tool.
//!
//! # Usage
//!
//! ```bash
//! # Encrypt with an explicit key
//! kdsm encrypt "Hello, World!" --key test-key
//!
//! # Encrypt with a generated key (the key is printed after the
//! # ciphertext so it can be persisted)
//! kdsm encrypt "Hello, World!"
//!
//! # Produce a shareable message with the key embedded
//! kdsm encrypt "Hello, World!" --embed-key
//!
//! # Decrypt; the key is read from the framing when not supplied
//! kdsm decrypt "[KDSM_KEY_START]aB3%[KDSM_KEY_END]..."
//!
//! # Generate a 16-character password without look-alike characters
//! kdsm keygen --length 16 --exclude-similar
//! ```

use clap::{Parser, Subcommand};
use kdsm_cli::{CliError, wire};
use kdsm_core::{Codec, DEFAULT_KEY_LENGTH, KeygenOptions};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// KDSM keyed shift-matrix text codec
#[derive(Parser, Debug)]
#[command(name = "kdsm")]
#[command(about = "Encrypt, decrypt, and generate keys with the KDSM codec")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt a message; a key is generated when none is supplied
    Encrypt {
        /// Plaintext message
        message: String,

        /// Encryption key; auto-generated when omitted
        #[arg(short, long)]
        key: Option<String>,

        /// Emit a single shareable line with the key embedded
        #[arg(long)]
        embed_key: bool,
    },

    /// Decrypt a message, reading an embedded key when none is supplied
    Decrypt {
        /// Ciphertext, optionally with embedded-key framing
        message: String,

        /// Decryption key; must match the encryption key
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Generate a random key/password
    Keygen {
        /// Number of characters to generate
        #[arg(short, long, default_value_t = DEFAULT_KEY_LENGTH)]
        length: usize,

        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Leave out digits
        #[arg(long)]
        no_numbers: bool,

        /// Leave out the special characters !@#$%^&*()
        #[arg(long)]
        no_special: bool,

        /// Exclude visually similar characters (0, O, l, 1, I)
        #[arg(long)]
        exclude_similar: bool,

        /// Draw only from this character set
        #[arg(long)]
        custom_chars: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    let codec = Codec::new();

    match args.command {
        Command::Encrypt { message, key, embed_key } => {
            let (key, generated) = match key {
                Some(key) => (key, false),
                None => (codec.generate_key(DEFAULT_KEY_LENGTH, &KeygenOptions::default())?, true),
            };

            tracing::debug!(chars = message.chars().count(), generated, "encrypting message");
            let ciphertext = codec.encode(&message, &key);

            if embed_key {
                emit(&wire::embed_key(&key, &ciphertext));
            } else {
                emit(&ciphertext);
                if generated {
                    emit(&format!("key: {key}"));
                }
            }
        },

        Command::Decrypt { message, key } => {
            let framed = wire::split_embedded_key(&message)
                .map(|(embedded, rest)| (embedded.to_owned(), rest.to_owned()));

            let (key, ciphertext) = match framed {
                Some((embedded, rest)) => {
                    tracing::debug!("message carries an embedded key");
                    (key.unwrap_or(embedded), rest)
                },
                None => (key.ok_or(CliError::MissingKey)?, message),
            };

            emit(&codec.decode(&ciphertext, &key));
        },

        Command::Keygen {
            length,
            no_uppercase,
            no_lowercase,
            no_numbers,
            no_special,
            exclude_similar,
            custom_chars,
        } => {
            let options = KeygenOptions {
                include_uppercase: !no_uppercase,
                include_lowercase: !no_lowercase,
                include_numbers: !no_numbers,
                include_special_chars: !no_special,
                exclude_similar,
                custom_chars,
            };

            emit(&codec.generate_key(length, &options)?);
        },
    }

    Ok(())
}

/// Results go to stdout; diagnostics go through tracing.
#[allow(clippy::print_stdout)]
#[allow(clippy::disallowed_macros)]
fn emit(line: &str) {
    println!("{line}");
}

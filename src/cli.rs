use anyhow::Context;
use clap::{Parser, Subcommand};

use cb58::{Id, NameError};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Encode names and bytes as CB58",
    long_about = None,
    after_help = "Names that match a subcommand (encode, decode, help) go after `--`: cb58 -- decode"
)]
struct Command {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Name to turn into a 32-byte CB58 identifier
    #[arg(allow_hyphen_values = true)]
    name: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// CB58-encode hex bytes
    Encode {
        #[arg()]
        hex: String,
    },
    /// Decode a CB58 string and print the payload as hex
    Decode {
        #[arg()]
        input: String,

        /// Print the payload as text, trailing null padding removed
        #[arg(long = "utf8", default_value = "false")]
        utf8: bool,
    },
}

pub fn execute() -> anyhow::Result<()> {
    let cli = Command::parse();
    tracing::debug!("Starting cli");

    match cli.command {
        Some(Commands::Encode { hex }) => {
            let bytes = hex::decode(hex.trim_start_matches("0x")).context("input is not hex")?;
            println!("{}", cb58::encode(&bytes));
        }
        Some(Commands::Decode { input, utf8 }) => {
            let bytes = cb58::decode(input.trim()).context("failed to decode cb58")?;
            if utf8 {
                let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
                let text = std::str::from_utf8(&bytes[..end]).context("payload is not utf-8")?;
                println!("{text}");
            } else {
                println!("{}", hex::encode(bytes));
            }
        }
        None => {
            let name = match &cli.name {
                Some(name) => name,
                None => anyhow::bail!("a name is required if just using cb58"),
            };
            println!("{}", encode_name(name)?);
        }
    }

    Ok(())
}

fn encode_name(name: &str) -> anyhow::Result<Id> {
    match Id::from_name(name) {
        Ok(id) => {
            eprintln!("encoding {name}");
            Ok(id)
        }
        Err(NameError::TooLong { len }) => {
            tracing::warn!(len, "rejected over-length name");
            anyhow::bail!("Name must be 32 characters or less")
        }
    }
}

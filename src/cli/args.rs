use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::CredentialArgs;

#[derive(Parser, Debug)]
#[command(name = "deeplcmd")]
#[command(about = "Translate text and documents with the DeepL API")]
#[command(version)]
pub struct Args {
    /// DeepL API key (used for this invocation only)
    #[arg(short = 'k', long)]
    pub key: Option<String>,

    /// File containing the DeepL API key (should contain ONLY the key)
    #[arg(long, visible_alias = "kf", value_name = "PATH")]
    pub keyfile: Option<PathBuf>,

    /// API base URL (defaults to the free or pro endpoint matching the key)
    #[arg(long, env = "DEEPL_SERVER_URL", value_name = "URL")]
    pub server_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout: u64,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress status messages
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn credential_args(&self) -> CredentialArgs {
        CredentialArgs {
            key: self.key.clone(),
            keyfile: self.keyfile.clone(),
        }
    }
}

#[derive(ClapArgs, Debug, Clone)]
pub struct TargetLanguage {
    /// Language of translation (e.g. DE, EN-GB); prompted for when omitted
    #[arg(short = 't', long = "target-language", visible_alias = "tl", value_name = "CODE")]
    pub target_language: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Save an API key for later invocations
    Login {
        /// API key to save
        #[arg(short = 'k', long, conflicts_with = "keyfile")]
        key: Option<String>,

        /// File containing the API key to save
        #[arg(long, visible_alias = "kf", value_name = "PATH")]
        keyfile: Option<PathBuf>,
    },
    /// Translate a piece of text and print the result
    Text {
        #[command(flatten)]
        target: TargetLanguage,

        /// Text to translate
        text: String,
    },
    /// Translate a document and save the result
    File {
        #[command(flatten)]
        target: TargetLanguage,

        /// Document to translate
        input: PathBuf,

        /// Where to save the translated document
        output: PathBuf,
    },
    /// List supported target language codes
    Languages,
}

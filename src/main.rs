use anyhow::Result;
use clap::Parser;
use std::io;
use std::time::Duration;

use deeplcmd::cli::{Args, dispatch};
use deeplcmd::config::{CredentialStore, Settings};
use deeplcmd::error::{CommandError, exit_code_for};
use deeplcmd::output::{self, OutputConfig};
use deeplcmd::translation::{DeeplClient, language_table};
use deeplcmd::ui::{Style, TerminalPrompter};
use deeplcmd::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));
    logging::init(args.verbose);

    let code = match run(args).await {
        Ok(()) => exitcode::OK,
        Err(err) => {
            report_error(&err);
            exit_code_for(&err)
        }
    };

    std::process::exit(code);
}

async fn run(args: Args) -> Result<()> {
    let settings = Settings::load(CredentialStore::new()?)
        .with_server_url(args.server_url.clone())
        .with_timeout(Duration::from_secs(args.timeout));

    let translator = DeeplClient::new(settings.server_url.clone(), settings.timeout)?;
    let credentials = args.credential_args();
    let mut prompter = TerminalPrompter;
    let mut stdout = io::stdout().lock();

    dispatch(
        args.command,
        credentials,
        &settings,
        &translator,
        &mut prompter,
        &mut stdout,
    )
    .await
}

fn report_error(err: &anyhow::Error) {
    tracing::debug!(error = ?err, "command failed");
    eprintln!("{} {err:#}", Style::error("Error:"));

    if let Some(CommandError::UnsupportedLanguage { .. }) = err.downcast_ref::<CommandError>() {
        eprintln!("{}", Style::hint("Please, use one of the following:"));
        eprint!("{}", language_table());
    }
}

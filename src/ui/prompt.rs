use anyhow::Result;
use inquire::{Password, PasswordDisplayMode, Text};

/// Line-oriented questions asked of the user.
///
/// Commands take a `Prompter` instead of talking to the terminal directly so
/// tests can script the answers.
pub trait Prompter {
    fn ask(&mut self, message: &str) -> Result<String>;

    /// Like [`Prompter::ask`] but the answer is not echoed.
    fn ask_secret(&mut self, message: &str) -> Result<String>;
}

/// Prompts on the controlling terminal with inquire.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, message: &str) -> Result<String> {
        Ok(Text::new(message).prompt()?)
    }

    fn ask_secret(&mut self, message: &str) -> Result<String> {
        Ok(Password::new(message)
            .without_confirmation()
            .with_display_mode(PasswordDisplayMode::Masked)
            .prompt()?)
    }
}

use anyhow::Result;
use inquire::InquireError;

mod prompt;
mod spinner;
mod theme;

pub use prompt::{Prompter, TerminalPrompter};
pub use spinner::Spinner;
pub use theme::Style;

/// Check if the inquire error is a user cancellation/interruption.
const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Returns `true` if `err` comes from the user cancelling a prompt (Ctrl+C or Escape).
pub fn is_cancellation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<InquireError>()
        .is_some_and(is_prompt_cancelled)
}

/// Wraps a function that uses interactive prompts and handles user cancellation gracefully.
///
/// If the user cancels the prompt (Ctrl+C or Escape), this function prints a newline
/// to clean up the terminal and returns `Ok(None)` instead of propagating the error.
pub fn handle_prompt_cancellation<T, F>(f: F) -> Result<Option<T>>
where
    F: FnOnce() -> Result<T>,
{
    match f() {
        Ok(value) => Ok(Some(value)),
        Err(e) if is_cancellation(&e) => {
            eprintln!();
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

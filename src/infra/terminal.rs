use std::io::{self, BufRead, Write};

use crate::error::{AppError, AppResult};
use crate::services::Prompter;

#[derive(Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn secret(&self, message: &str) -> AppResult<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{message}")?;
        stdout.flush()?;
        rpassword::read_password()
            .map_err(|err| AppError::Prompt(format!("failed to read secret input: {err}")))
    }

    fn line(&self, message: &str) -> AppResult<Option<String>> {
        let mut stdout = io::stdout();
        write!(stdout, "{message}")?;
        stdout.flush()?;

        let mut input = String::new();
        let read = io::stdin().lock().read_line(&mut input)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
    }
}

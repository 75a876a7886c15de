use crate::error::AppResult;

/// Interactive input. `None` means standard input reached end of file.
pub trait Prompter: Send + Sync {
    fn secret(&self, message: &str) -> AppResult<String>;
    fn line(&self, message: &str) -> AppResult<Option<String>>;

    /// Only `y`/`Y` accepts; anything else, including end of input, declines.
    fn confirm(&self, message: &str) -> AppResult<bool> {
        let answer = self.line(&format!("{message} [y/N]: "))?;
        Ok(matches!(answer.as_deref().map(str::trim), Some("y" | "Y")))
    }
}

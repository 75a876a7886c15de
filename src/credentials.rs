use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{CREDENTIAL_KEY, StandupConfig};
use crate::error::{AppError, AppResult};
use crate::services::Prompter;

/// A `KEY=value` file holding the issue tracker API key.
pub struct CredentialStore {
    path: PathBuf,
    ignore_path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: PathBuf, ignore_path: PathBuf) -> Self {
        Self { path, ignore_path }
    }

    pub fn from_config(config: &StandupConfig) -> Self {
        Self::new(
            config.credential_path.clone(),
            config.ignore_file_path.clone(),
        )
    }

    /// Returns the stored key, prompting for it and persisting it first when
    /// the store does not have it yet.
    pub fn ensure_credential(&self, prompter: &dyn Prompter) -> AppResult<String> {
        if let Some(value) = self.read(CREDENTIAL_KEY)? {
            return Ok(value);
        }

        println!("{CREDENTIAL_KEY} not found in {}.", self.path.display());
        let secret = prompter.secret("Enter your Linear API key: ")?;
        let secret = secret.trim();
        if secret.is_empty() {
            return Err(AppError::Credential("API key cannot be empty".to_string()));
        }

        self.append(CREDENTIAL_KEY, secret)?;
        self.ensure_ignored()?;
        tracing::info!(path = %self.path.display(), "stored API key");

        self.read(CREDENTIAL_KEY)?.ok_or_else(|| {
            AppError::Credential(format!(
                "{CREDENTIAL_KEY} is still unset after writing {}",
                self.path.display()
            ))
        })
    }

    pub fn read(&self, key: &str) -> AppResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(parse_value(&contents, key)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(AppError::Io(err)),
        }
    }

    fn append(&self, key: &str, value: &str) -> AppResult<()> {
        append_line(&self.path, &format!("{key}={value}"))
    }

    fn ensure_ignored(&self) -> AppResult<()> {
        let entry = ignore_entry(&self.path, &self.ignore_path);
        let listed = match fs::read_to_string(&self.ignore_path) {
            Ok(contents) => contents.lines().any(|line| {
                let line = line.trim();
                line == entry || line.strip_prefix('/') == Some(entry.as_str())
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => false,
            Err(err) => return Err(AppError::Io(err)),
        };
        if !listed {
            append_line(&self.ignore_path, &entry)?;
            println!("Added {entry} to {}", self.ignore_path.display());
        }
        Ok(())
    }
}

/// Last assignment wins; `export` prefixes and surrounding quotes are dropped.
fn parse_value(contents: &str, key: &str) -> Option<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (name, value) = line.split_once('=')?;
            (name.trim() == key).then(|| unquote(value.trim()).to_string())
        })
        .last()
        .filter(|value| !value.is_empty())
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Path of the credential file as the ignore file should list it.
fn ignore_entry(credential_path: &Path, ignore_path: &Path) -> String {
    let relative = ignore_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .and_then(|dir| credential_path.strip_prefix(dir).ok());
    let entry = match relative {
        Some(path) => path.to_path_buf(),
        None if credential_path.is_relative() => credential_path.to_path_buf(),
        None => credential_path
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| credential_path.to_path_buf()),
    };
    entry
        .to_string_lossy()
        .replace('\\', "/")
        .trim_start_matches("./")
        .to_string()
}

fn append_line(path: &Path, line: &str) -> AppResult<()> {
    let needs_newline = match fs::read(path) {
        Ok(bytes) => !bytes.is_empty() && !bytes.ends_with(b"\n"),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => false,
        Err(err) => return Err(AppError::Io(err)),
    };
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if needs_newline {
        writeln!(file)?;
    }
    writeln!(file, "{line}")?;
    Ok(())
}

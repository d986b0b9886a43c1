//! Workflow commands understood by the Actions runner.
//!
//! Two transports exist: `::name key=val::message` lines on stdout, and
//! appends to the files the runner names in `GITHUB_ENV` / `GITHUB_OUTPUT`.

use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

pub fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

/// Renders a stdout command line, without the trailing newline.
pub fn format_command(command: &str, properties: &[(&str, &str)], message: &str) -> String {
    let mut line = format!("::{command}");
    if !properties.is_empty() {
        let props = properties
            .iter()
            .map(|(k, v)| format!("{k}={}", escape_property(v)))
            .collect::<Vec<_>>()
            .join(",");
        line.push(' ');
        line.push_str(&props);
    }
    line.push_str("::");
    line.push_str(&escape_data(message));
    line
}

pub fn issue_command(
    out: &mut impl Write,
    command: &str,
    properties: &[(&str, &str)],
    message: &str,
) -> Result<()> {
    writeln!(out, "{}", format_command(command, properties, message))?;
    Ok(())
}

/// Reports the failure reason of the run.
pub fn set_failed(out: &mut impl Write, message: &str) -> Result<()> {
    issue_command(out, "error", &[], message)
}

/// Heredoc style `name<<delim` block accepted by file commands.
pub fn key_value_message(name: &str, value: &str, delimiter: &str) -> Result<String> {
    if name.contains(delimiter) {
        return Err(Error::Delimiter {
            what: "name",
            delimiter: delimiter.to_owned(),
        });
    }
    if value.contains(delimiter) {
        return Err(Error::Delimiter {
            what: "value",
            delimiter: delimiter.to_owned(),
        });
    }
    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}"))
}

fn new_delimiter() -> String {
    format!("ghadelimiter_{}", uuid::Uuid::new_v4())
}

/// A runner-provided file that key/value commands are appended to.
#[derive(Debug, Clone)]
pub struct FileCommand {
    path: PathBuf,
}

impl FileCommand {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file named by `key`, if the runner set it.
    pub fn from_env(key: &str) -> Option<Self> {
        std::env::var(key)
            .ok()
            .filter(|p| !p.is_empty())
            .map(Self::new)
    }

    pub fn append(&self, name: &str, value: &str) -> Result<()> {
        let message = key_value_message(name, value, &new_delimiter())?;
        let mut f = OpenOptions::new().append(true).open(&self.path)?;
        writeln!(f, "{message}")?;
        Ok(())
    }
}

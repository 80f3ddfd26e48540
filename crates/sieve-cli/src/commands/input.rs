//! Loading the lines to recognize.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::cli::InputArgs;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {}", .path.display(), .source)]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Input text and how it splits into lines.
#[derive(Debug)]
pub struct Input {
    text: String,
    inline: bool,
}

impl Input {
    pub fn inline(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            inline: true,
        }
    }

    pub fn stream(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            inline: false,
        }
    }

    /// Lines without their terminators.
    ///
    /// Inline text is always at least one line, even when empty. A stream yields
    /// nothing for empty input and has no line after a final terminator.
    pub fn lines(&self) -> Vec<&str> {
        if self.inline {
            return self.text.split('\n').map(strip_cr).collect();
        }
        self.text.lines().collect()
    }
}

fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

pub fn load(args: &InputArgs) -> Result<Input, InputError> {
    if let Some(text) = &args.query_text {
        return Ok(Input::inline(text.as_str()));
    }
    match args.file.as_deref() {
        Some(path) if path.as_os_str() != "-" => load_file(path),
        _ => load_stdin(),
    }
}

/// Loads the input or exits with a message.
pub fn load_or_exit(args: &InputArgs) -> Input {
    load(args).unwrap_or_else(|err| {
        eprintln!("error: {}", err);
        std::process::exit(1);
    })
}

fn load_stdin() -> Result<Input, InputError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(InputError::Stdin)?;
    Ok(Input::stream(buf))
}

fn load_file(path: &Path) -> Result<Input, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::File {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Input::stream(text))
}

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::MnemonicError;

/// Error reported by the command line front end.
#[derive(Error, Debug)]
#[error("{msg}")]
pub struct CliError {
    pub msg: String,
    #[source]
    pub source: Option<MnemonicError>,
}

/// Describe a failed file operation and suggest a fix.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    let suggestion = match err.kind() {
        io::ErrorKind::NotFound => "Check that the file exists and the path is correct.",
        io::ErrorKind::PermissionDenied => "Check the file permissions.",
        io::ErrorKind::InvalidData => "The word list must be UTF-8 text.",
        _ => "Check the path and permissions.",
    };
    format!("Error {operation} '{}': {err}. {suggestion}", path.display())
}

/// Convert an I/O error into a std::io::Error with context.
pub fn io_error(operation: &str, path: &Path, err: io::Error) -> io::Error {
    io::Error::new(err.kind(), format_io_error(operation, path, &err))
}

/// CLI error without an underlying library error.
pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Convert a library error into a CLI error with a hint.
pub fn mnemonic_cli_error(context: &str, err: MnemonicError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(err),
    }
}

/// Return an actionable hint for an error variant.
pub fn cli_hint(err: &MnemonicError) -> String {
    use MnemonicError::*;
    match err {
        InvalidBaseCharacter { .. } => format!("{err}. Sequences may only contain A, C, T and G."),
        Format(msg) => format!("{msg}. The value is not a valid up2bit encoding."),
        DuplicateIndex(_)
        | MissingIndex(_)
        | DuplicateWord { .. }
        | InvalidDiceCode { .. }
        | InvalidLine { .. } => {
            format!("{err}. Check the word-list file.")
        }
        InvalidWordlistSize(_) => format!("{err}. Word lists need 2^k or 6^k entries."),
        UnknownWord(w) => {
            format!("unknown word '{w}'. Was the mnemonic made with a different word list?")
        }
        InvalidRadix(_) | InvalidDigit { .. } => format!("{err}. This is a bug."),
        Config(msg) => format!("{msg}. Invalid configuration."),
        Io(io) => format!("{io}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_suggestion() {
        let err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let msg = format_io_error("reading", Path::new("list.txt"), &err);
        assert!(msg.contains("'list.txt'"));
        assert!(msg.contains("Check that the file exists"));
    }

    #[test]
    fn hint_names_unknown_word() {
        let err = mnemonic_cli_error("decoding", MnemonicError::UnknownWord("zzz".into()));
        assert!(err.to_string().starts_with("decoding: unknown word 'zzz'"));
        assert!(std::error::Error::source(&err).is_some());
    }
}

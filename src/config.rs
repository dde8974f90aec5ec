use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use log::debug;

use crate::io_utils::io_error;
use crate::{MnemonicError, Wordlist};

/// Environment variable consulted for the word-list path.
pub const WORDLIST_ENV: &str = "DNA_MNEMONIC_WORDLIST";

/// Runtime configuration for the command line front end.
#[derive(Debug, Clone)]
pub struct Config {
    /// Word-list file to load.
    pub wordlist: Option<PathBuf>,
    /// Upper-case the first letter of each printed word.
    pub title_case: bool,
    /// Separator placed between printed words.
    pub separator: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wordlist: None,
            title_case: false,
            separator: " ".to_string(),
        }
    }
}

impl Config {
    /// Open and validate the configured word list.
    pub fn load_wordlist(&self) -> Result<Wordlist, MnemonicError> {
        let path = self
            .wordlist
            .as_ref()
            .ok_or_else(|| MnemonicError::Config(format!("no word list given (use --wordlist or {WORDLIST_ENV})")))?;
        debug!("loading word list from {}", path.display());
        let file = File::open(path).map_err(|e| io_error("opening word list", path, e))?;
        Wordlist::from_reader(BufReader::new(file))
    }
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::info;
use num_bigint::BigUint;
use serde::Serialize;

use dna_mnemonic::{
    config::WORDLIST_ENV,
    digits::{format_digits, to_digits},
    io_utils::{mnemonic_cli_error, simple_cli_error},
    mnemonic, up2bit, Config, Mnemonic, MnemonicCodec, Sequence,
};

/// Convert DNA sequences to word mnemonics and back.
#[derive(Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct WordlistArgs {
    /// Word-list file (Diceware or one word per line)
    #[arg(long, short = 'w', env = WORDLIST_ENV)]
    wordlist: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a sequence as a mnemonic
    Encode {
        sequence: String,
        #[command(flatten)]
        wordlist: WordlistArgs,
        /// Capitalise each word
        #[arg(long)]
        title_case: bool,
        /// Separator printed between words
        #[arg(long, default_value = " ")]
        separator: String,
        #[arg(long)]
        json: bool,
    },
    /// Decode a mnemonic back into a sequence
    Decode {
        #[arg(required = true)]
        words: Vec<String>,
        #[command(flatten)]
        wordlist: WordlistArgs,
        #[arg(long)]
        json: bool,
    },
    /// Print the up2bit integer of a sequence
    Up2bit {
        sequence: String,
        /// Print digits in this radix instead of decimal
        #[arg(long, value_parser = clap::value_parser!(u32).range(2..=36))]
        radix: Option<u32>,
    },
    /// Decode a decimal up2bit integer
    FromUp2bit { value: String },
    /// Describe a word list
    Info {
        #[command(flatten)]
        wordlist: WordlistArgs,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct EncodeReport<'a> {
    sequence: &'a str,
    up2bit: String,
    words: &'a Mnemonic,
}

#[derive(Serialize)]
struct DecodeReport<'a> {
    words: &'a [String],
    sequence: String,
}

#[derive(Serialize)]
struct InfoReport {
    words: usize,
    radix: dna_mnemonic::Radix,
    block_size: usize,
    fingerprint: String,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn config_for(wordlist: WordlistArgs) -> Config {
    Config {
        wordlist: wordlist.wordlist,
        ..Config::default()
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Encode {
            sequence,
            wordlist,
            title_case,
            separator,
            json,
        } => {
            let cfg = Config {
                title_case,
                separator,
                ..config_for(wordlist)
            };
            let wl = cfg
                .load_wordlist()
                .map_err(|e| mnemonic_cli_error("loading word list", e))?;
            info!("word list has {} words ({})", wl.len(), wl.fingerprint());
            let seq: Sequence = sequence
                .trim()
                .parse()
                .map_err(|e| mnemonic_cli_error("parsing sequence", e))?;
            let words =
                mnemonic::encode(&seq, &wl).map_err(|e| mnemonic_cli_error("encoding", e))?;
            if json {
                let report = EncodeReport {
                    sequence: sequence.trim(),
                    up2bit: up2bit::encode(seq.bases()).to_string(),
                    words: &words,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", words.render(&cfg.separator, cfg.title_case));
            }
        }
        Command::Decode {
            words,
            wordlist,
            json,
        } => {
            let wl = config_for(wordlist)
                .load_wordlist()
                .map_err(|e| mnemonic_cli_error("loading word list", e))?;
            let words: Vec<String> = words
                .iter()
                .flat_map(|w| w.split_whitespace())
                .map(str::to_string)
                .collect();
            let seq = mnemonic::decode(&words, &wl).map_err(|e| mnemonic_cli_error("decoding", e))?;
            if json {
                let report = DecodeReport {
                    words: &words,
                    sequence: seq.to_string(),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{seq}");
            }
        }
        Command::Up2bit { sequence, radix } => {
            let seq: Sequence = sequence
                .trim()
                .parse()
                .map_err(|e| mnemonic_cli_error("parsing sequence", e))?;
            let value = up2bit::encode(seq.bases());
            match radix {
                Some(r) => {
                    let digits = to_digits(&value, r).map_err(|e| mnemonic_cli_error("radix", e))?;
                    println!("{}", format_digits(&digits));
                }
                None => println!("{value}"),
            }
        }
        Command::FromUp2bit { value } => {
            let value: BigUint = value
                .trim()
                .parse()
                .map_err(|_| simple_cli_error(&format!("'{value}' is not a decimal integer")))?;
            let seq = up2bit::decode(&value).map_err(|e| mnemonic_cli_error("decoding", e))?;
            println!("{seq}");
        }
        Command::Info { wordlist, json } => {
            let wl = config_for(wordlist)
                .load_wordlist()
                .map_err(|e| mnemonic_cli_error("loading word list", e))?;
            let codec = MnemonicCodec::for_size(wl.len())
                .map_err(|e| mnemonic_cli_error("word list", e))?;
            let report = InfoReport {
                words: wl.len(),
                radix: codec.radix(),
                block_size: codec.block_size(),
                fingerprint: wl.fingerprint(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("words: {}", report.words);
                println!("radix: {}", report.radix);
                println!("block size: {}", report.block_size);
                println!("fingerprint: {}", report.fingerprint);
            }
        }
    }
    Ok(())
}

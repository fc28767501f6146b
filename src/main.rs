//! `dbfdecode` — convert legacy code page text to UTF-8.
//!
//! Reads raw bytes from files or stdin, runs them through one
//! [`Decoder`] and writes the UTF-8 result to stdout.

use dbfdecode::{DecodeError, Decoder};

use is_terminal::IsTerminal;
use std::io::{self, Read, Write};
use std::process;

const USAGE: &str = "\
dbfdecode - convert legacy dBASE code page text to UTF-8

Usage: dbfdecode [OPTIONS] [FILE...]
       cat FILE | dbfdecode [OPTIONS]
       dbfdecode [OPTIONS] -

Options:
  -e, --encoding NAME   Source encoding (default: kamenicky)
  -l, --list            List encoding names
  -h, --help            Show this help

Encodings: utf-8, utf-8-strict, windows-1250, kamenicky.
The DBFDECODE_ENCODING environment variable sets the default encoding.

Input that is already valid UTF-8 is passed through unchanged.
Multiple files can be specified and will be processed in order.
Use - to read from stdin explicitly.";

/// Environment variable consulted when `--encoding` is not given.
const ENCODING_ENV: &str = "DBFDECODE_ENCODING";

/// Maximum input file size (256 MiB). Decoding is done in memory.
const MAX_INPUT_SIZE: usize = 256 * 1024 * 1024;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut encoding: Option<String> = None;
    let mut files: Vec<String> = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{USAGE}");
                return;
            }
            "-l" | "--list" => {
                for decoder in Decoder::ALL {
                    println!("{decoder}");
                }
                return;
            }
            "-e" | "--encoding" => {
                let Some(name) = iter.next() else {
                    eprintln!("dbfdecode: {arg} requires an argument");
                    process::exit(1);
                };
                encoding = Some(name.clone());
            }
            s if s.starts_with("--encoding=") => {
                encoding = Some(s["--encoding=".len()..].to_string());
            }
            "-" => files.push("-".to_string()),
            s if s.starts_with('-') => {
                eprintln!("dbfdecode: unknown option: {s}");
                eprintln!("{USAGE}");
                process::exit(1);
            }
            _ => files.push(arg.clone()),
        }
    }

    let encoding = encoding
        .or_else(|| std::env::var(ENCODING_ENV).ok())
        .unwrap_or_else(|| Decoder::Kamenicky.to_string());
    let decoder: Decoder = match encoding.parse() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("dbfdecode: {e}");
            process::exit(1);
        }
    };

    // No files specified → read from stdin, unless nobody is piping anything
    if files.is_empty() {
        if io::stdin().is_terminal() {
            eprintln!("{USAGE}");
            process::exit(1);
        }
        files.push("-".to_string());
    }

    let mut exit_code = 0;
    for path in &files {
        let (buf, filename) = if path == "-" {
            let mut buf = Vec::new();
            if let Err(e) = io::stdin().read_to_end(&mut buf) {
                eprintln!("dbfdecode: stdin: {e}");
                exit_code = 1;
                continue;
            }
            (buf, "stdin".to_string())
        } else {
            match std::fs::read(path) {
                Ok(b) => (b, path.clone()),
                Err(e) => {
                    eprintln!("dbfdecode: {path}: {e}");
                    exit_code = 1;
                    continue;
                }
            }
        };

        if buf.len() > MAX_INPUT_SIZE {
            #[allow(clippy::cast_precision_loss)] // only used in error message
            let size_mib = buf.len() as f64 / (1024.0 * 1024.0);
            eprintln!(
                "dbfdecode: {filename}: too large ({size_mib:.1} MiB, max {} MiB)",
                MAX_INPUT_SIZE / (1024 * 1024),
            );
            exit_code = 1;
            continue;
        }

        if let Err(e) = run(&buf, decoder) {
            eprintln!("dbfdecode: {filename}: {e}");
            exit_code = 1;
        }
    }

    if exit_code != 0 {
        process::exit(exit_code);
    }
}

/// Errors reported per input file.
#[derive(Debug, thiserror::Error)]
enum CliError {
    /// Writing the decoded text to stdout failed.
    #[error("{0}")]
    Io(#[from] io::Error),

    /// The decoder rejected the input.
    #[error("{0}")]
    Decode(#[from] DecodeError),
}

fn run(data: &[u8], decoder: Decoder) -> Result<(), CliError> {
    let text = decoder.decode(data)?;
    io::stdout().write_all(&text)?;
    Ok(())
}

use crate::curator::{CuratorInterface, RunSummary};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Interactively sort candidate words into an accepted and a rejected list
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding oldlist.txt, newlist.txt and rejects.txt
    /// (defaults to the directory of this executable)
    #[arg(short = 'd', long = "dir")]
    pub dir: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

/// Interpret one line of yes/no input. `None` means the answer was not understood.
pub fn parse_yes_no(input: &str, default: bool) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Ask until the answer is understood. Closed input is an `UnexpectedEof` error.
pub fn read_yes_no<R: BufRead>(reader: &mut R, message: &str, default: bool) -> io::Result<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    loop {
        print!("{message} {hint} ");
        io::stdout().flush()?;

        let mut input = String::new();
        if reader.read_line(&mut input)? == 0 {
            println!();
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was given",
            ));
        }

        match parse_yes_no(&input, default) {
            Some(answer) => return Ok(answer),
            None => println!("Please answer y or n."),
        }
    }
}

pub fn display_related_accepted(words: &[&str]) {
    println!("related words accepted: {}", words.join(", "));
}

pub fn display_related_rejected(words: &[&str]) {
    println!("related words rejected: {}", words.join(", "));
}

pub fn display_summary(summary: &RunSummary) {
    println!(
        "Done: {} auto-accepted, {} accepted, {} rejected, {} already decided.",
        summary.auto_accepted, summary.accepted, summary.rejected, summary.skipped
    );
}

/// CLI implementation of the CuratorInterface trait
/// This struct wraps a BufRead reader and answers the curator's questions on the console
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> CuratorInterface for CliInterface<R> {
    fn display_related_accepted(&mut self, words: &[&str]) {
        display_related_accepted(words);
    }

    fn display_related_rejected(&mut self, words: &[&str]) {
        display_related_rejected(words);
    }

    fn confirm(&mut self, message: &str, default: bool) -> io::Result<bool> {
        read_yes_no(&mut self.reader, message, default)
    }
}

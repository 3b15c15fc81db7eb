use refine_wordlist::cli::{CliInterface, display_summary, parse_cli};
use refine_wordlist::logging::init_logging;
use refine_wordlist::{CurateError, Curator, WordlistPaths};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logging(cli.verbose);

    match run(cli.dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{e:?}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(dir: Option<PathBuf>) -> Result<(), CurateError> {
    let paths = match dir {
        Some(dir) => WordlistPaths::in_dir(dir),
        None => WordlistPaths::beside_executable()?,
    };
    log::info!("reading candidates from {}", paths.source.display());

    let stdin = io::stdin();
    let mut curator = Curator::new(paths, CliInterface::new(stdin.lock()));
    let summary = curator.run()?;
    display_summary(&summary);
    Ok(())
}

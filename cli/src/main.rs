use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use minesweeper_alpha_core::GameEngine;
use tracing_subscriber::filter::LevelFilter;

use crate::banner::Banners;
use crate::play::Terminal;

mod banner;
mod play;
mod seed_file;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed file: `rows cols mines` followed by one `row col` pair per mine
    #[arg(value_name = "SEED_FILE_PATH")]
    seed: PathBuf,

    /// Directory with welcome.txt, gameover.txt and gamewon.txt overriding the built-in screens
    #[arg(long, value_name = "DIR")]
    resources: Option<PathBuf>,

    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn init_logging(level: log::LevelFilter) {
    let level = match level {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };
    // the game screen owns stdout
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            eprintln!("{}", err.render());
            return ExitCode::from(1);
        }
    };
    init_logging(args.verbose.log_level_filter());
    log::debug!("args: {:?}", args);

    let board = match seed_file::read_board(&args.seed) {
        Ok(board) => board,
        Err(err) => {
            eprintln!();
            eprintln!("{}", err);
            return ExitCode::from(err.exit_code());
        }
    };

    let banners = match &args.resources {
        Some(dir) => Banners::load(dir),
        None => Banners::default(),
    };

    let mut engine = GameEngine::new(board);
    let mut terminal = Terminal {
        input: io::stdin().lock(),
        output: io::stdout().lock(),
        errors: io::stderr().lock(),
    };

    match terminal.play(&mut engine, &banners) {
        Ok(outcome) => {
            log::info!("game over after {} rounds: {:?}", engine.round(), outcome);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

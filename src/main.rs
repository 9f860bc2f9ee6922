//! Command-line analysis of a single position
//!
//! Reads a board diagram (see [`gomoku_core::notation`]) from a file or
//! stdin and prints the engine's decision for the chosen side.

use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::time::Duration;

use clap::{Arg, ArgAction, Command};
use log::{debug, info};

use gomoku_core::bridge::encode_move;
use gomoku_core::{AIEngine, Diagram, EngineConfig, Stone};

fn setup_logger(logfile: Option<&String>, verbose: bool) -> Result<(), Box<dyn Error>> {
    let log_dispatcher = fern::Dispatch::new().format(|out, message, record| {
        out.finish(format_args!(
            "{}[{}][{}] {}",
            chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
            record.target(),
            record.level(),
            message
        ))
    });
    let stderr_level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    if let Some(log_file) = logfile {
        log_dispatcher
            .chain(
                fern::Dispatch::new()
                    .level(log::LevelFilter::Debug)
                    .chain(fern::log_file(log_file)?),
            )
            .chain(fern::Dispatch::new().level(stderr_level).chain(io::stderr()))
            .apply()?;
    } else {
        log_dispatcher
            .level(stderr_level)
            .chain(io::stderr())
            .apply()?;
    }
    Ok(())
}

fn read_diagram(path: &str) -> Result<Diagram, Box<dyn Error>> {
    let text = if path == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        text
    } else {
        fs::read_to_string(path)?
    };
    Ok(text.parse()?)
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let matches = Command::new("gomoku-core")
        .version("0.1")
        .about("Ninuki-renju move search for a single position")
        .arg(
            Arg::new("board")
                .value_name("FILE")
                .help("Board diagram to analyse, or '-' for stdin")
                .default_value("-")
                .num_args(1),
        )
        .arg(
            Arg::new("side")
                .short('s')
                .long("side")
                .env("GOMOKU_SIDE")
                .help("Side to move")
                .num_args(1)
                .value_parser(["black", "white"])
                .default_value("black"),
        )
        .arg(
            Arg::new("depth")
                .short('d')
                .long("depth")
                .env("GOMOKU_DEPTH")
                .help("Maximum search depth")
                .num_args(1)
                .default_value("10")
                .value_parser(clap::value_parser!(u8).range(1..)),
        )
        .arg(
            Arg::new("timeMs")
                .short('t')
                .long("time-ms")
                .env("GOMOKU_TIME_MS")
                .help("Wall-clock budget per decision in milliseconds, 0 for none")
                .num_args(1)
                .default_value("500")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("nodes")
                .short('n')
                .long("nodes")
                .env("GOMOKU_NODES")
                .help("Node budget per decision. Makes the search reproducible when --time-ms is 0")
                .num_args(1)
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("noTt")
                .long("no-tt")
                .env("GOMOKU_NO_TT")
                .help("Disable the transposition table")
                .action(ArgAction::SetTrue)
                .num_args(0),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .env("GOMOKU_SEED")
                .help("Seed for shuffling equally scored candidates")
                .num_args(1)
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("candidates")
                .short('c')
                .long("candidates")
                .help("Print the scored root candidates")
                .action(ArgAction::SetTrue)
                .num_args(0),
        )
        .arg(
            Arg::new("logfile")
                .short('l')
                .long("logfile")
                .env("LOGFILE")
                .value_name("gomoku.log")
                .help("Name of debug logfile")
                .num_args(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log engine decisions to stderr")
                .action(ArgAction::SetTrue)
                .num_args(0),
        )
        .get_matches();

    setup_logger(matches.get_one::<String>("logfile"), matches.get_flag("verbose"))?;

    let side = match matches.get_one::<String>("side").map(String::as_str) {
        Some("white") => Stone::White,
        _ => Stone::Black,
    };
    let board_path = matches
        .get_one::<String>("board")
        .map(String::as_str)
        .unwrap_or("-");
    let diagram = read_diagram(board_path)?;

    let time_limit = match matches.get_one::<u64>("timeMs").copied().unwrap_or(0) {
        0 => None,
        ms => Some(Duration::from_millis(ms)),
    };
    let config = EngineConfig::default()
        .board_size(diagram.board.size())
        .max_depth(matches.get_one::<u8>("depth").copied().unwrap_or(10))
        .time_limit(time_limit)
        .node_limit(matches.get_one::<u64>("nodes").copied())
        .use_tt(!matches.get_flag("noTt"))
        .tie_break_seed(matches.get_one::<u64>("seed").copied());
    debug!("{:?}", config);

    let mut engine = AIEngine::new(side, config)?;
    engine.load_board(
        &diagram.board.to_codes(),
        diagram.state.captured_by_black,
        diagram.state.captured_by_white,
    )?;

    for stone in [Stone::Black, Stone::White] {
        if engine.query_win(stone) {
            println!("{:?} has already won", stone);
            return Ok(());
        }
    }

    let result = engine.compute_best_move_with_stats();
    info!("decision took {} ms", result.time_ms);
    match result.best_move {
        Some(pos) => println!(
            "move {} [{}] via {:?}",
            pos,
            encode_move(result.best_move),
            result.search_type
        ),
        None => println!("no legal move for {:?} (stalemate)", side),
    }
    println!(
        "score {}, depth {}, {} nodes, {} ms",
        result.score, result.depth, result.nodes, result.time_ms
    );

    if matches.get_flag("candidates") {
        for mv in engine.candidates() {
            println!("  {:<9} {:>16} {:?}", mv.pos.to_string(), mv.score, mv.provenance);
        }
    }
    Ok(())
}

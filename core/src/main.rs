mod args;

use args::Args;
use clap::Parser;
use cozy_chess::{Board, Color};
use endgame::Endgames;
use log::{debug, LevelFilter};
use material::{Entry, MaterialConfig, MaterialTable};
use simplelog::{Config, SimpleLogger, WriteLogger};
use std::error::Error;
use std::fs::File;
use utils::{Position, Variant};

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;
    let variant: Variant = args.variant.parse()?;

    let config = MaterialConfig {
        table_size: args.table_size,
    };
    let mut table = MaterialTable::new(&config);
    let endgames = Endgames::new();

    let fens = if args.fens.is_empty() {
        vec![START_FEN.to_string()]
    } else {
        args.fens.clone()
    };

    for fen in &fens {
        let board: Board = fen
            .parse()
            .map_err(|e| format!("Invalid FEN '{}': {:?}", fen, e))?;
        let position = Position::with_variant(&board, variant);

        debug!("Probing {} ({})", fen, variant);
        let entry = table.probe(&position, &endgames);
        print_entry(fen, entry);
    }

    debug!("Table usage: {} permille", table.hashfull());

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    if let Some(log_file) = &args.log_file {
        WriteLogger::init(level, Config::default(), File::create(log_file)?)?;
    } else {
        SimpleLogger::init(level, Config::default())?;
    }

    Ok(args)
}

fn print_entry(fen: &str, entry: &Entry) {
    println!("{}", fen);
    println!("  key         {:#018x}", entry.key());
    println!("  phase       {:.3}", entry.game_phase());
    println!("  imbalance   {}", entry.imbalance());

    if let Some(eval) = entry.evaluation_function() {
        println!("  evaluation  {}", eval);
        return;
    }

    for (name, color) in [("white", Color::White), ("black", Color::Black)] {
        let scaling = entry
            .scaling_function(color)
            .map_or_else(|| "-".to_string(), |s| s.kind.to_string());
        println!(
            "  {:<11} factor {:>3}, scaling {}",
            name,
            entry.factor(color),
            scaling
        );
    }
}

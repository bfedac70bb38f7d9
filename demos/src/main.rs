//! Command-line pathfinding demo.
//!
//! Run: cargo run --bin pathfinder-demo [LAYOUT | CONFIG.json]
//!
//! A layout file uses `.`, `#`, `S` and `E` glyphs, one row per line. A
//! `.json` argument is read as a `GridConfig`. Without an argument the
//! default 20x20 board is searched across a wall with a gap at the bottom.
//! Set `RUST_LOG=debug` (or `trace`) to follow the search.

use std::error::Error;

use pathfinder_grid::{Coord, Grid, GridConfig};
use pathfinder_search::Board;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut board = match std::env::args().nth(1) {
        Some(file) => load(&file)?,
        None => demo_board()?,
    };

    let result = board.find_path()?;
    println!("{}", board.render());
    match result.path() {
        Some(path) => println!(
            "cost {} over {} steps ({} cells painted)",
            path.cost(),
            path.len() - 1,
            path.trail().len()
        ),
        None => println!("no path found"),
    }
    Ok(())
}

fn load(file: &str) -> Result<Board, Box<dyn Error>> {
    let text = std::fs::read_to_string(file)?;
    let grid = if file.ends_with(".json") {
        serde_json::from_str::<GridConfig>(&text)?.build()?
    } else {
        text.parse::<Grid>()?
    };
    log::info!(
        "loaded {}x{} grid with {} obstacles from {file}",
        grid.rows(),
        grid.cols(),
        grid.obstacles().count()
    );
    Ok(Board::new(grid))
}

fn demo_board() -> Result<Board, Box<dyn Error>> {
    let mut board = Board::from_config(&GridConfig::default())?;
    for row in 0..17 {
        board.toggle_obstacle(Coord::new(row, 10))?;
    }
    Ok(board)
}

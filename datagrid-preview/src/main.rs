//! Drive a grid from JSON files and print every frame as text.
//!
//! ```text
//! datagrid-preview demo/table.json --config demo/config.json --events demo/events.json
//! ```

mod render;

use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use datagrid::prelude::*;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

#[derive(Debug, Parser)]
#[command(about = "Preview datagrid snapshots in the terminal")]
struct Args {
    /// Table data (`{"headers": [...], "rows": [...]}`).
    data: PathBuf,

    /// Grid configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON array of events to replay, one frame printed per event.
    #[arg(long)]
    events: Option<PathBuf>,

    /// Print snapshots as JSON instead of text.
    #[arg(long)]
    json: bool,

    #[arg(long, default_value = "datagrid-preview.log")]
    log_file: PathBuf,

    #[arg(long, default_value = "debug")]
    log_level: LevelFilter,
}

fn main() {
    let args = Args::parse();

    match File::create(&args.log_file) {
        Ok(file) => {
            let _ = WriteLogger::init(args.log_level, Config::default(), file);
        }
        Err(e) => eprintln!("Warning: cannot open log file: {}", e),
    }

    if let Err(e) = run(&args) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), GridError> {
    let data: TableData = serde_json::from_str(&std::fs::read_to_string(&args.data)?)?;
    let config = match &args.config {
        Some(path) => GridConfig::from_json_file(path)?,
        None => GridConfig::default(),
    };
    let events: Vec<GridEvent> = match &args.events {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => Vec::new(),
    };

    log::info!(
        "loaded {} columns, {} rows, {} events",
        data.column_count(),
        data.row_count(),
        events.len()
    );

    let mut grid = Grid::new(data, config);
    grid.on_column_reorder(|order: &[usize]| println!("> column order: {:?}", order));
    grid.on_selection_change(|ids: &[RowId]| {
        let ids: Vec<String> = ids.iter().map(RowId::to_string).collect();
        println!("> selected: [{}]", ids.join(", "));
    });

    for warning in grid.take_warnings() {
        println!("! {}", warning);
    }
    print_frame(&grid, args.json, "initial")?;

    for event in events {
        let label = format!("{:?}", event);
        let result = grid.handle(event);
        log::debug!("{} -> {:?}", label, result);
        for warning in grid.take_warnings() {
            println!("! {}", warning);
        }
        if grid.take_dirty() {
            print_frame(&grid, args.json, &label)?;
        } else {
            println!("-- {} ({:?}, no change)", label, result);
        }
    }
    Ok(())
}

fn print_frame(grid: &Grid, json: bool, label: &str) -> Result<(), GridError> {
    let snapshot = grid.snapshot();
    println!("-- {}", label);
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", render::render(&snapshot));
    }
    Ok(())
}

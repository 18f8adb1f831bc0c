use std::fs::read_to_string;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bunnyhq::keypad::decode;
use bunnyhq::walk::Walker;
use bunnyhq::{room, triangle, Keypad};
use clap::{Parser, ValueEnum};
use log::info;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Puzzle {
    Walk,
    Keypad,
    Triangle,
    Room,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Layout {
    Square,
    Diamond,
}

/// Solve one of the Easter Bunny HQ puzzles from an input file
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Which puzzle the input is for
    #[arg(value_enum)]
    puzzle: Puzzle,
    /// Path to the puzzle input
    input: PathBuf,
    /// Keypad layout to decode on; both are tried if omitted
    #[arg(long, value_enum)]
    layout: Option<Layout>,
    /// Decrypted room name to look up
    #[arg(long, default_value = "northpole object storage")]
    find: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let input = read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    info!("solving {:?} from {}", args.puzzle, args.input.display());

    match args.puzzle {
        Puzzle::Walk => {
            let mut walker = Walker::new();
            println!("distance: {}", walker.follow(&input).context("following directions")?);
            match walker.first_revisit() {
                Some(distance) => println!("first revisit: {}", distance),
                None => println!("first revisit: none"),
            }
        }
        Puzzle::Keypad => {
            let layouts = match args.layout {
                Some(layout) => vec![layout],
                None => vec![Layout::Square, Layout::Diamond],
            };

            for layout in layouts {
                let keypad = match layout {
                    Layout::Square => Keypad::square(),
                    Layout::Diamond => Keypad::diamond(),
                };
                let code = decode(keypad, &input).with_context(|| format!("decoding on the {:?} keypad", layout))?;
                println!("{:?} code: {}", layout, code);
            }
        }
        Puzzle::Triangle => {
            println!("possible by rows: {}", triangle::count_possible_by_rows(&input).context("reading rows")?);
            println!("possible by columns: {}", triangle::count_possible_by_columns(&input).context("reading columns")?);
        }
        Puzzle::Room => {
            println!("real sector ID sum: {}", room::sum_real_sector_ids(&input).context("reading rooms")?);
            match room::find_sector(&input, &args.find).context("reading rooms")? {
                Some(sector) => println!("{}: sector {}", args.find, sector),
                None => println!("{}: not found", args.find),
            }
        }
    }

    Ok(())
}

mod args;
#[cfg(feature = "tui")]
mod tui;

use args::Args;
use cellauto_lib::{AutomatonSer, PolyAutomaton};
use log::{info, Level};
use std::{error::Error, fs};

#[cfg(feature = "tui")]
use std::time::Duration;

/// Builds the automaton from a saved state or from the configuration,
/// then places the pattern, if any.
fn automaton(args: &Args) -> Result<PolyAutomaton, Box<dyn Error>> {
    let mut automaton = match &args.load {
        Some(path) => {
            info!("restoring from {}", path.display());
            let ser: AutomatonSer = serde_json::from_str(&fs::read_to_string(path)?)?;
            ser.automaton()?
        }
        None => args.config.automaton()?,
    };
    if let Some(path) = &args.pattern {
        info!("loading pattern from {}", path.display());
        automaton.clear();
        automaton.load_rle_centered(&fs::read_to_string(path)?)?;
    }
    Ok(automaton)
}

fn save(args: &Args, automaton: &PolyAutomaton) -> Result<(), Box<dyn Error>> {
    if let Some(path) = &args.save {
        info!("saving to {}", path.display());
        fs::write(path, serde_json::to_string_pretty(&automaton.ser())?)?;
    }
    Ok(())
}

/// Runs the automaton in the full-screen interface, then prints
/// the last generation.
#[cfg(feature = "tui")]
fn run_tui(mut args: Args) -> Result<(), Box<dyn Error>> {
    let resize_to_terminal = !args.size_given && args.load.is_none();
    if resize_to_terminal {
        let (width, height) = tui::terminal_grid_size()?;
        args.config.width = width;
        args.config.height = height;
    }
    let mut automaton = automaton(&args)?;
    tui::run_with_tui(
        &mut automaton,
        Duration::from_millis(args.interval),
        resize_to_terminal,
    )?;
    print!("{}", automaton.display());
    save(&args, &automaton)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse().unwrap_or_else(|e| e.exit());

    #[cfg(feature = "tui")]
    let headless = args.no_tui;
    #[cfg(not(feature = "tui"))]
    let headless = true;

    let level = match args.verbose {
        0 => Level::Warn,
        1 => Level::Info,
        2 => Level::Debug,
        _ => Level::Trace,
    };
    if headless || args.verbose > 0 {
        simple_logger::init_with_level(level)?;
    }

    #[cfg(feature = "tui")]
    {
        if !headless {
            return run_tui(args);
        }
    }

    let mut automaton = automaton(&args)?;
    automaton.step(args.generations);
    print!("{}", automaton.display());
    save(&args, &automaton)
}

//! Parsing command-line arguments.

use cellauto_lib::{BoundaryKind, Config, Life};
use clap::{
    builder::PossibleValuesParser, crate_description, crate_name, crate_version,
    error::ErrorKind, value_parser, Arg, ArgAction, Command, Error,
};
use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

/// A struct to store the parse results.
pub(crate) struct Args {
    /// The configuration, from the file given by `--config` and then
    /// overridden by the command line.
    pub(crate) config: Config,
    /// Whether the width and height were given explicitly,
    /// either on the command line or in the configuration file.
    pub(crate) size_given: bool,
    pub(crate) load: Option<PathBuf>,
    pub(crate) save: Option<PathBuf>,
    pub(crate) pattern: Option<PathBuf>,
    pub(crate) generations: u64,
    pub(crate) interval: u64,
    pub(crate) verbose: u8,
    #[cfg(feature = "tui")]
    pub(crate) no_tui: bool,
}

fn command() -> Command {
    let command = Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .long_about(
            "Conway's Game of Life on a double-buffered grid.\n\
             \n\
             The grid is either bounded by dead cells (free boundary) \n\
             or wraps around like a torus (periodic boundary).\n\
             \n\
             The final generation is displayed in a mix of Plaintext and \n\
             RLE format.\n\
             * Dead cells are represented by `.`;\n\
             * Living cells are represented by `o`;\n\
             * Each line is ended with `$`;\n\
             * The whole pattern is ended with `!`\n",
        )
        .arg(
            Arg::new("WIDTH")
                .help("Width of the grid")
                .long_help(
                    "Width of the grid\n\
                     Defaults to the width of the terminal in the TUI, \
                     and to the configuration otherwise.\n",
                )
                .index(1)
                .value_parser(value_parser!(i32).range(1..)),
        )
        .arg(
            Arg::new("HEIGHT")
                .help("Height of the grid")
                .long_help(
                    "Height of the grid\n\
                     Defaults to twice the height of the terminal minus the status bar \
                     in the TUI, and to the configuration otherwise.\n",
                )
                .index(2)
                .requires("WIDTH")
                .value_parser(value_parser!(i32).range(1..)),
        )
        .arg(
            Arg::new("SEED")
                .help("Seed of the random initial generation")
                .short('s')
                .long("seed")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("BOUNDARY")
                .help("What happens at the edges of the grid")
                .long_help(
                    "What happens at the edges of the grid\n\
                     \"free\": cells outside of the grid are always dead.\n\
                     \"periodic\": opposite edges are adjacent.\n",
                )
                .short('b')
                .long("boundary")
                .value_parser(PossibleValuesParser::new(["free", "periodic"])),
        )
        .arg(
            Arg::new("RULE")
                .help("Rule of the cellular automaton")
                .long_help(
                    "Rule of the cellular automaton\n\
                     Supports totalistic Life-like rules, such as B3/S23 or B36/S23.\n",
                )
                .short('r')
                .long("rule")
                .value_parser(|s: &str| {
                    s.parse::<Life>()
                        .map(|_| s.to_string())
                        .map_err(|e| e.to_string())
                }),
        )
        .arg(
            Arg::new("CONFIG")
                .help("Reads the configuration from a JSON, YAML or TOML file")
                .long("config")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("PATTERN")
                .help("Places an RLE pattern at the center of a cleared grid")
                .short('p')
                .long("pattern")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("LOAD")
                .help("Restores a state saved with --save")
                .long_help(
                    "Restores a state saved with --save\n\
                     The saved configuration replaces the other options.\n",
                )
                .long("load")
                .conflicts_with_all(["WIDTH", "CONFIG", "SEED", "BOUNDARY", "RULE"])
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("SAVE")
                .help("Saves the final state as JSON")
                .long("save")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("GENERATIONS")
                .help("Number of generations to run without the TUI")
                .short('g')
                .long("generations")
                .default_value("100")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("INTERVAL")
                .help("Milliseconds between two generations in the TUI")
                .short('i')
                .long("interval")
                .default_value("100")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("VERBOSE")
                .help("Prints logs to stderr, more with -vv")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count),
        );

    #[cfg(feature = "tui")]
    let command = command.arg(
        Arg::new("NOTUI")
            .help("Runs the generations and prints the result, without entering the TUI")
            .short('n')
            .long("no-tui")
            .action(ArgAction::SetTrue),
    );

    command
}

/// Reads a configuration file, choosing the format by the extension.
fn read_config(path: &Path) -> Result<Config, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    let result = match path.extension().and_then(OsStr::to_str) {
        Some("json") => serde_json::from_str(&text).map_err(|e| e.to_string()),
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text).map_err(|e| e.to_string()),
        Some("toml") => toml::from_str(&text).map_err(|e| e.to_string()),
        _ => {
            return Err(format!(
                "{}: unknown configuration format, expected .json, .yaml or .toml",
                path.display()
            ))
        }
    };
    result.map_err(|e| format!("{}: {}", path.display(), e))
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        let mut command = command();
        let matches = command.try_get_matches_from_mut(std::env::args_os())?;

        let mut config = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => {
                read_config(path).map_err(|e| command.error(ErrorKind::InvalidValue, e))?
            }
            None => Config::default(),
        };
        let mut size_given = matches.contains_id("CONFIG");

        if let Some(&width) = matches.get_one::<i32>("WIDTH") {
            config.width = width;
            size_given = true;
        }
        if let Some(&height) = matches.get_one::<i32>("HEIGHT") {
            config.height = height;
        }
        if let Some(&seed) = matches.get_one::<u64>("SEED") {
            config.seed = seed;
        }
        if let Some(boundary) = matches.get_one::<String>("BOUNDARY") {
            config.boundary = boundary
                .parse::<BoundaryKind>()
                .map_err(|e| command.error(ErrorKind::InvalidValue, e))?;
        }
        if let Some(rule_string) = matches.get_one::<String>("RULE") {
            config.rule_string = rule_string.clone();
        }

        Ok(Args {
            config,
            size_given,
            load: matches.get_one::<PathBuf>("LOAD").cloned(),
            save: matches.get_one::<PathBuf>("SAVE").cloned(),
            pattern: matches.get_one::<PathBuf>("PATTERN").cloned(),
            generations: matches.get_one::<u64>("GENERATIONS").copied().unwrap_or(100),
            interval: matches.get_one::<u64>("INTERVAL").copied().unwrap_or(100),
            verbose: matches.get_count("VERBOSE"),
            #[cfg(feature = "tui")]
            no_tui: matches.get_flag("NOTUI"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_valid() {
        command().debug_assert();
    }

    #[test]
    fn load_replaces_configuration() {
        for flag in ["--seed=3", "--boundary=free", "--rule=B36/S23", "--config=a.toml"] {
            let result = command().try_get_matches_from(["cellauto", "--load", "a.json", flag]);
            assert_eq!(
                result.map(|_| ()).map_err(|e| e.kind()),
                Err(ErrorKind::ArgumentConflict)
            );
        }
        assert!(command()
            .try_get_matches_from(["cellauto", "--load", "a.json", "--save", "b.json"])
            .is_ok());
    }
}

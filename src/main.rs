use anyhow::Result;
use clap::{Arg, ArgAction, Command};

use striker::commands::{self, config::ConfigKey};
use striker::core::config::Config;

fn main() -> Result<()> {
    let matches = Command::new("striker")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Conky widgets for system metrics, the night sky and airport weather")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .global(true)
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue),
        )
        .subcommand(Command::new("cpu").about("CPU model, frequency, usage and core temperatures"))
        .subcommand(Command::new("memory").about("RAM and swap usage"))
        .subcommand(Command::new("disks").about("Usage of each mount point in mountpoints.txt"))
        .subcommand(Command::new("network").about("Addresses, connectivity and traffic"))
        .subcommand(Command::new("system").about("OS, kernel, uptime and process count"))
        .subcommand(Command::new("gpu").about("NVIDIA GPU memory, load and temperature"))
        .subcommand(Command::new("stars").about("Next page of the rotating star table"))
        .subcommand(Command::new("exoplanets").about("Next page of the rotating exoplanet table"))
        .subcommand(Command::new("planets").about("Solar system planets with today's positions"))
        .subcommand(
            Command::new("definitions").about("Alternates between the glossary and the spectral legend"),
        )
        .subcommand(
            Command::new("airports").about("Home airport weather plus a rotating set of others"),
        )
        .subcommand(Command::new("sun").about("Sunrise, sunset and moon phase"))
        .subcommand(
            Command::new("set")
                .about("Set a configuration value")
                .arg(
                    Arg::new("key")
                        .help("Configuration key")
                        .required(true)
                        .index(1)
                        .value_parser(ConfigKey::names()),
                )
                .arg(
                    Arg::new("value")
                        .help("New value")
                        .required(true)
                        .allow_hyphen_values(true)
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("get").about("Show a configuration value").arg(
                Arg::new("key")
                    .help("Configuration key")
                    .required(true)
                    .index(1)
                    .value_parser(ConfigKey::names()),
            ),
        )
        .subcommand(Command::new("paths").about("Show the config file and data files in use"))
        .get_matches();

    striker::init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("set", sub_matches)) => commands::config::handle_set(sub_matches)?,
        Some(("get", sub_matches)) => commands::config::handle_get(sub_matches)?,
        Some(("paths", _)) => commands::config::handle_paths()?,
        Some((widget, _)) => run_widget(widget)?,
        None => {
            println!("No command provided. Use --help for usage information.");
        }
    }

    Ok(())
}

fn run_widget(name: &str) -> Result<()> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            // Conky still needs something to show
            println!("{}", commands::render_or_report(Err(e)));
            return Ok(());
        }
    };

    match name {
        "cpu" => commands::cpu::execute(),
        "memory" => commands::memory::execute(),
        "disks" => commands::disks::execute(&config),
        "network" => commands::network::execute(&config),
        "system" => commands::system::execute(),
        "gpu" => commands::gpu::execute(),
        "stars" => commands::stars::execute(&config),
        "exoplanets" => commands::exoplanets::execute(&config),
        "planets" => commands::planets::execute(&config),
        "definitions" => commands::definitions::execute(&config),
        "airports" => commands::airports::execute(&config),
        "sun" => commands::sun::execute(&config),
        other => anyhow::bail!("Unknown command: {}", other),
    }
}

//! Skills CLI - install and synchronize agent skills from a factory
//!
//! Usage: skills <COMMAND>
//!
//! Commands:
//!   install   Install skills, workflows and rules from the factory
//!   update    Pull factory changes into installed skills
//!   backport  Copy a locally modified skill back into the factory
//!   list      Show skill inventory with sync status
//!   presets   List presets defined by the factory
//!   doctor    Check skills for broken links and hardcoded paths

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let json = cli.json;
    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.config.as_deref();
    let (json, verbose) = (cli.json, cli.verbose);

    match cli.command {
        Commands::Install {
            preset,
            no_interactive,
            force,
            global,
        } => commands::cmd_install(config, preset, no_interactive, force, global, json, verbose),
        Commands::Update { force, yes } => commands::cmd_update(config, force, yes, json, verbose),
        Commands::Backport { name, yes } => {
            commands::cmd_backport(config, &name, yes, json, verbose)
        }
        Commands::List => commands::cmd_list(config, json, verbose),
        Commands::Presets => commands::cmd_presets(config, json, verbose),
        Commands::Doctor {
            factory,
            exit_on_error,
        } => commands::cmd_doctor(config, factory, exit_on_error, json, verbose),
    }
}

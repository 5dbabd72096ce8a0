use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Skills - install and sync agent skills from a factory
#[derive(Parser, Debug)]
#[command(name = "skills")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Set SKILL_FACTORY_SOURCE or `source` in the config to point at your factory.")]
pub struct Cli {
    /// Config file (default: ~/.config/skill-factory/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install skills, workflows and rules from the factory
    Install {
        /// Only install the skills of this preset
        #[arg(short, long)]
        preset: Option<String>,

        /// Never show the preset picker
        #[arg(long)]
        no_interactive: bool,

        /// Replace an existing installation
        #[arg(short, long)]
        force: bool,

        /// Install into the configured global path instead of the project
        #[arg(short, long)]
        global: bool,
    },

    /// Pull factory changes into installed skills, one confirmation per skill
    Update {
        /// Overwrite every skill without diffing or asking
        #[arg(short, long)]
        force: bool,

        /// Skip interactive prompts (auto-confirm every change)
        #[arg(short, long)]
        yes: bool,
    },

    /// Copy a locally modified skill back into the factory
    Backport {
        /// Skill directory name under skills/
        name: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show skill inventory with sync status
    List,

    /// List presets defined by the factory
    Presets,

    /// Check skills for broken links, unknown references and hardcoded paths
    Doctor {
        /// Audit the factory instead of the installed skills
        #[arg(long)]
        factory: bool,

        /// Exit with code 1 if errors are found
        #[arg(long)]
        exit_on_error: bool,
    },
}

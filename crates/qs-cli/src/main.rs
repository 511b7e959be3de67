//! Command-line frontend for Questsheet, a Pathfinder-style character sheet
//! that turns everyday tasks into quests.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use qs_campaign::config::DEFAULT_DATA_FILE;

#[derive(Parser)]
#[command(
    name = "qs",
    about = "Questsheet: level up your character by finishing real-life quests",
    version,
    propagate_version = true
)]
struct Cli {
    /// Campaign data file
    #[arg(long, global = true, env = "QS_DATA", default_value = DEFAULT_DATA_FILE)]
    data: PathBuf,

    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new campaign file with the default character
    Init,

    /// Show the character sheet
    Sheet {
        /// List every skill, not only trained ones
        #[arg(short, long)]
        all: bool,
    },

    /// List the core classes, or apply one to the character
    Classes {
        /// Set class, level, attack bonus, saves and hit points from this class
        #[arg(long)]
        apply: Option<String>,

        /// Level used with --apply
        #[arg(long, default_value = "1")]
        level: u32,
    },

    /// Create a new level-1 character, replacing the current one
    Create {
        /// Character name
        #[arg(short, long)]
        name: String,

        /// Class name (unknown names become Fighter)
        #[arg(short, long)]
        class: String,

        /// Score method: array, roll, manual
        #[arg(short, long, default_value = "array")]
        method: String,

        /// Manual scores, STR to CHA, comma separated
        #[arg(long, value_delimiter = ',')]
        scores: Vec<String>,

        /// RNG seed for rolled scores
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Set a character field (name, class, level, xp, str, dex-temp, hp, ac, fort, will-misc, ...)
    Set {
        /// Field to change
        field: String,

        /// New value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Show or change one skill
    Skill {
        /// Skill name (case-insensitive)
        name: String,

        /// Invested ranks
        #[arg(long)]
        ranks: Option<String>,

        /// Mark as a class skill (true/false)
        #[arg(long)]
        class_skill: Option<bool>,

        /// Misc modifier
        #[arg(long, allow_hyphen_values = true)]
        misc: Option<String>,
    },

    /// Manage quests
    #[command(subcommand)]
    Quest(QuestCommand),

    /// Manage the journal
    #[command(subcommand)]
    Journal(JournalCommand),

    /// Manage feats and class features
    #[command(subcommand)]
    Feat(FeatCommand),

    /// Manage spells
    #[command(subcommand)]
    Spell(SpellCommand),
}

#[derive(Subcommand)]
enum QuestCommand {
    /// Add a quest
    Add {
        /// What needs doing
        title: String,

        /// Attribute raised on completion (STR, DEX, CON, INT, WIS, CHA)
        #[arg(short, long)]
        attr: String,

        /// Longer description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// List quests, newest first
    List {
        /// Include completed quests
        #[arg(short, long)]
        all: bool,
    },
    /// Complete a quest and collect the reward
    Done {
        /// Quest id
        id: u64,
    },
    /// Delete a quest
    Rm {
        /// Quest id
        id: u64,
    },
}

#[derive(Subcommand)]
enum JournalCommand {
    /// Write an entry
    Add {
        /// Entry text
        content: String,

        /// Image reference (path or data URL)
        #[arg(long)]
        image: Option<String>,
    },
    /// List entries, newest first
    List,
    /// Delete an entry
    Rm {
        /// Entry id
        id: u64,
    },
    /// Export the journal
    Export {
        /// Output format: markdown, text
        #[arg(short, long, default_value = "markdown")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum FeatCommand {
    /// Add a feat
    Add {
        /// Feat title
        title: String,

        /// What it does
        #[arg(short, long, default_value = "")]
        description: String,

        /// Record as a class feature instead of a feat
        #[arg(long)]
        class_feature: bool,
    },
    /// List feats, oldest first
    List,
    /// Delete a feat
    Rm {
        /// Feat id
        id: u64,
    },
}

#[derive(Subcommand)]
enum SpellCommand {
    /// Learn a spell
    Add {
        /// Spell name
        name: String,

        /// Spell level (0-9)
        #[arg(short, long, default_value = "0")]
        level: String,

        /// Short description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// List spells by level
    List,
    /// Forget a spell
    Rm {
        /// Spell id
        id: u64,
    },
    /// Toggle the prepared flag
    Prepare {
        /// Spell id
        id: u64,
    },
    /// Toggle the used flag
    Use {
        /// Spell id
        id: u64,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "qs_campaign=info,warn",
        _ => "qs_campaign=debug,info",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let data = cli.data;

    let result = match cli.command {
        Commands::Init => commands::init::run(&data),
        Commands::Sheet { all } => commands::sheet::run(&data, all),
        Commands::Classes { apply, level } => {
            commands::classes::run(&data, apply.as_deref(), level)
        }
        Commands::Create {
            name,
            class,
            method,
            scores,
            seed,
        } => commands::create::run(&data, &name, &class, &method, &scores, seed),
        Commands::Set { field, value } => commands::set::run(&data, &field, &value),
        Commands::Skill {
            name,
            ranks,
            class_skill,
            misc,
        } => commands::skill::run(
            &data,
            &name,
            ranks.as_deref(),
            class_skill,
            misc.as_deref(),
        ),
        Commands::Quest(cmd) => match cmd {
            QuestCommand::Add {
                title,
                attr,
                description,
            } => commands::quest::add(&data, &title, &attr, description.as_deref()),
            QuestCommand::List { all } => commands::quest::list(&data, all),
            QuestCommand::Done { id } => commands::quest::done(&data, id),
            QuestCommand::Rm { id } => commands::quest::remove(&data, id),
        },
        Commands::Journal(cmd) => match cmd {
            JournalCommand::Add { content, image } => {
                commands::journal::add(&data, &content, image)
            }
            JournalCommand::List => commands::journal::list(&data),
            JournalCommand::Rm { id } => commands::journal::remove(&data, id),
            JournalCommand::Export { format, output } => {
                commands::journal::export(&data, &format, output.as_deref())
            }
        },
        Commands::Feat(cmd) => match cmd {
            FeatCommand::Add {
                title,
                description,
                class_feature,
            } => commands::feat::add(&data, &title, &description, class_feature),
            FeatCommand::List => commands::feat::list(&data),
            FeatCommand::Rm { id } => commands::feat::remove(&data, id),
        },
        Commands::Spell(cmd) => match cmd {
            SpellCommand::Add {
                name,
                level,
                description,
            } => commands::spell::add(&data, &name, &level, description),
            SpellCommand::List => commands::spell::list(&data),
            SpellCommand::Rm { id } => commands::spell::remove(&data, id),
            SpellCommand::Prepare { id } => commands::spell::prepare(&data, id),
            SpellCommand::Use { id } => commands::spell::mark_used(&data, id),
        },
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};

use onion_core::domain::{DiFramework, UiFramework};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "onion",
    bin_name = "onion",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Model and check onion architectures",
    long_about = "Onion keeps a JSON model of a layered architecture \
                  (entities, domain services, application services and \
                  repositories) and refuses dependencies that point outward.",
    after_help = "EXAMPLES:\n\
        \x20 onion init --sample\n\
        \x20 onion add entity User\n\
        \x20 onion connect UserService User\n\
        \x20 onion validate\n\
        \x20 onion completions bash > /usr/share/bash-completion/completions/onion",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new architecture document.
    #[command(
        about = "Create an architecture document",
        after_help = "EXAMPLES:\n\
            \x20 onion init                       # empty, default frameworks\n\
            \x20 onion init --sample              # e-commerce sample\n\
            \x20 onion init --sample blog --ui vue --di angular\n\
            \x20 onion -f app/onion.json init --folder ./src --force"
    )]
    Init(InitArgs),

    /// Print the architecture.
    #[command(visible_alias = "ls", about = "Show the architecture")]
    Show,

    /// Check the document against every rule.
    #[command(
        about = "Validate the architecture document",
        after_help = "EXAMPLES:\n\
            \x20 onion validate\n\
            \x20 onion validate --fail-fast\n\
            \x20 onion --output-format json validate"
    )]
    Validate(ValidateArgs),

    /// Add a node.
    #[command(
        about = "Add an entity or service",
        after_help = "EXAMPLES:\n\
            \x20 onion add entity User\n\
            \x20 onion add domain-service UserService\n\
            \x20 onion add application-service UserAppService"
    )]
    Add(AddArgs),

    /// Remove a node and every edge that mentions it.
    #[command(visible_alias = "rm", about = "Remove a node and its edges")]
    Remove(RemoveArgs),

    /// Add a dependency edge.
    #[command(
        about = "Connect two nodes",
        after_help = "EXAMPLES:\n\
            \x20 onion connect UserService User\n\
            \x20 onion connect UserAppService UserService\n\
            \x20 onion connect UserAppService IUserRepository"
    )]
    Connect(EdgeArgs),

    /// Remove a dependency edge.
    #[command(about = "Disconnect two nodes")]
    Disconnect(EdgeArgs),

    /// List what a node may connect to.
    #[command(
        about = "List possible or current targets of a node",
        after_help = "EXAMPLES:\n\
            \x20 onion targets UserAppService\n\
            \x20 onion targets UserAppService --current"
    )]
    Targets(TargetsArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 onion completions bash > ~/.local/share/bash-completion/completions/onion\n\
            \x20 onion completions zsh  > ~/.zfunc/_onion\n\
            \x20 onion completions fish > ~/.config/fish/completions/onion.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the application settings.
    #[command(
        about = "Settings inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 onion config get defaults.file\n\
            \x20 onion config list\n\
            \x20 onion config path"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `onion init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Start from a built-in sample instead of an empty document.
    #[arg(
        long = "sample",
        value_name = "PRESET",
        num_args = 0..=1,
        default_missing_value = "e-commerce",
        help = "Start from a sample: blank, e-commerce, blog"
    )]
    pub sample: Option<String>,

    /// UI framework; prompts when omitted on a terminal.
    #[arg(long = "ui", value_name = "FRAMEWORK", value_parser = UiFramework::from_str)]
    pub ui: Option<UiFramework>,

    /// DI framework; prompts when omitted on a terminal.
    #[arg(long = "di", value_name = "FRAMEWORK", value_parser = DiFramework::from_str)]
    pub di: Option<DiFramework>,

    /// Value of `folderPath` in the new document.
    #[arg(long = "folder", value_name = "PATH")]
    pub folder: Option<String>,

    /// Overwrite an existing document.
    #[arg(long = "force", help = "Overwrite an existing document")]
    pub force: bool,
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `onion validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Stop at the first problem instead of listing all of them.
    #[arg(long = "fail-fast")]
    pub fail_fast: bool,
}

// ── add / remove ──────────────────────────────────────────────────────────────

/// Which collection a new node goes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NodeKind {
    #[value(alias = "e")]
    Entity,
    #[value(alias = "ds")]
    DomainService,
    #[value(alias = "as")]
    ApplicationService,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entity => write!(f, "entity"),
            Self::DomainService => write!(f, "domain service"),
            Self::ApplicationService => write!(f, "application service"),
        }
    }
}

/// Arguments for `onion add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(value_enum, value_name = "KIND")]
    pub kind: NodeKind,

    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Arguments for `onion remove`.
#[derive(Debug, Args)]
pub struct RemoveArgs {
    #[arg(value_name = "NAME")]
    pub name: String,
}

// ── connect / disconnect / targets ────────────────────────────────────────────

/// Arguments for `onion connect` and `onion disconnect`.
#[derive(Debug, Args)]
pub struct EdgeArgs {
    /// Dependent (outer) node.
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Dependency (inner) node or `I<Entity>Repository`.
    #[arg(value_name = "TARGET")]
    pub target: String,
}

/// Arguments for `onion targets`.
#[derive(Debug, Args)]
pub struct TargetsArgs {
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Show existing connections instead of candidates.
    #[arg(long = "current")]
    pub current: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `onion completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `onion config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a settings key.
    Get {
        /// Dotted key path, e.g. `defaults.ui_framework`.
        key: String,
    },
    /// Print all settings.
    List,
    /// Print the path of the user settings file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

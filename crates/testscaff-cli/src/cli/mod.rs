//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "testscaff",
    bin_name = "testscaff",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Instant test scaffolding",
    long_about = "Testscaff generates companion unit, integration, and fixture \
                  test files for classes in a namespaced codebase.",
    after_help = "EXAMPLES:\n\
        \x20 testscaff test MyNamespace/ClassName::method --type both  ## creates both tests\n\
        \x20 testscaff test MyNamespace/ClassName::method --type unit  ## creates unit test\n\
        \x20 testscaff test MyNamespace/ClassName -t i -g cache        ## every public method\n\
        \x20 testscaff completions bash > /usr/share/bash-completion/completions/testscaff",
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
    /// Generate test classes.
    #[command(
        visible_alias = "t",
        about = "Generate test classes",
        after_help = "EXAMPLES:\n\
            \x20 testscaff test App/Payment::charge --type both --group billing\n\
            \x20 testscaff test App/Payment::charge --type unit\n\
            \x20 testscaff test App/Payment                  ## every public method"
    )]
    Test(TestArgs),

    /// Initialise a Testscaff configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 testscaff init           # write .testscaff.toml\n\
            \x20 testscaff init --force   # overwrite an existing one"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 testscaff completions bash > ~/.local/share/bash-completion/completions/testscaff\n\
            \x20 testscaff completions zsh  > ~/.zfunc/_testscaff\n\
            \x20 testscaff completions fish > ~/.config/fish/completions/testscaff.fish"
    )]
    Completions(CompletionsArgs),
}

// ── test ──────────────────────────────────────────────────────────────────────

/// Arguments for `testscaff test`.
#[derive(Debug, Args)]
pub struct TestArgs {
    /// Class or method to generate tests for: `Namespace/Class` scaffolds
    /// every public method, `Namespace/Class::method` a single one.
    #[arg(value_name = "METHOD", help = "The method to test")]
    pub reference: String,

    /// Which test set to generate.
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        value_enum,
        default_value = "both",
        help = "Type of the test"
    )]
    pub kind: TestType,

    /// Group annotation for the generated tests.
    #[arg(
        short = 'g',
        long = "group",
        value_name = "LABEL",
        help = "Group of the test"
    )]
    pub group: Option<String>,
}

/// Which templates the `test` command instantiates. A fixture is always
/// generated alongside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TestType {
    /// Also accepted as `u`.
    #[value(alias = "u")]
    Unit,
    /// Also accepted as `i`.
    #[value(alias = "i")]
    Integration,
    /// Also accepted as `b`.
    #[value(alias = "b")]
    Both,
    /// Also accepted as `f`.
    #[value(name = "fixture", alias = "f")]
    FixtureOnly,
}

impl std::fmt::Display for TestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unit => write!(f, "unit"),
            Self::Integration => write!(f, "integration"),
            Self::Both => write!(f, "both"),
            Self::FixtureOnly => write!(f, "fixture"),
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `testscaff init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `testscaff completions`.
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

// ── tests ─────────────────────────────────────────────────────────────────────

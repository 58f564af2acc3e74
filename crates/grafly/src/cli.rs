//! Clap derive structures for the `grafly` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// grafly -- manage Grafana datasources and dashboard templates
#[derive(Debug, Parser)]
#[command(
    name = "grafly",
    version,
    about = "Manage Grafana datasources and dashboards from the command line",
    long_about = "Talks to a Grafana server over its HTTP API using a cookie session.\n\n\
        Dashboards can be written as terse TOML or JSON templates; `metric`\n\
        shorthand entries are expanded into full InfluxDB targets on upload.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Server profile to use
    #[arg(long, short = 'p', env = "GRAFLY_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Grafana URL (overrides profile)
    #[arg(long, env = "GRAFLY_URL", global = true)]
    pub url: Option<String>,

    /// Login user (overrides profile)
    #[arg(long, short = 'u', env = "GRAFLY_USER", global = true)]
    pub user: Option<String>,

    /// Login password
    #[arg(long, env = "GRAFLY_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "GRAFLY_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "GRAFLY_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (default: profile, then 5)
    #[arg(long, env = "GRAFLY_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check credentials by opening a session
    Login,

    /// Manage datasources
    #[command(alias = "ds")]
    Datasources(DatasourcesArgs),

    /// Fetch, convert, upload and delete dashboards
    #[command(alias = "db")]
    Dashboards(DashboardsArgs),

    /// Inspect installed plugins
    Plugins(PluginsArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Datasources ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DatasourcesArgs {
    #[command(subcommand)]
    pub command: DatasourcesCommand,
}

#[derive(Debug, Subcommand)]
pub enum DatasourcesCommand {
    /// List all datasources
    #[command(alias = "ls")]
    List,

    /// Show one datasource by name
    Get {
        /// Datasource name
        name: String,
    },

    /// Create a datasource from a JSON definition
    Create {
        /// JSON file with the datasource definition
        #[arg(long, short = 'F')]
        from_file: PathBuf,
    },

    /// Delete a datasource by name
    #[command(alias = "rm")]
    Delete {
        /// Datasource name
        name: String,
    },
}

// ── Dashboards ───────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DashboardsArgs {
    #[command(subcommand)]
    pub command: DashboardsCommand,
}

#[derive(Debug, Subcommand)]
pub enum DashboardsCommand {
    /// Fetch a dashboard by slug
    Get {
        /// Dashboard slug
        slug: String,
    },

    /// Expand a template and print the dashboard JSON (no server needed)
    Convert {
        /// TOML or JSON template file
        template: PathBuf,
    },

    /// Expand a template and upload it
    Upload {
        /// TOML or JSON template file
        template: PathBuf,

        /// Replace an existing dashboard with the same title
        #[arg(long)]
        overwrite: bool,
    },

    /// Delete a dashboard by slug
    #[command(alias = "rm")]
    Delete {
        /// Dashboard slug
        slug: String,
    },
}

// ── Plugins ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct PluginsArgs {
    #[command(subcommand)]
    pub command: PluginsCommand,
}

#[derive(Debug, Subcommand)]
pub enum PluginsCommand {
    /// List plugins, optionally filtered by type
    #[command(alias = "ls")]
    List {
        /// Plugin type (e.g. "datasource", "panel", "app")
        #[arg(long = "type", short = 't', default_value = "")]
        plugin_type: String,
    },

    /// List datasource plugins keyed by type
    Datasources,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current configuration (passwords masked)
    Show,

    /// Print the config file location
    Path,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

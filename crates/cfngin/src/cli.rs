//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// CFNgin - Render CloudFormation templates from declarative stack configs
#[derive(Parser, Debug)]
#[command(name = "cfngin")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to cfngin.yaml config file
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render stack templates
    Render(RenderArgs),

    /// Validate the configuration and resolve stack variables
    Validate(ValidateArgs),

    /// Blueprint information
    #[command(subcommand)]
    Blueprints(BlueprintCommands),

    /// Initialize a new cfngin.yaml
    Init(InitArgs),
}

/// Rendered template format
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Stack to render (default: all enabled stacks)
    pub stack: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<Utf8PathBuf>,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to config file (default: --config or find cfngin.yaml)
    #[arg(short, long)]
    pub file: Option<Utf8PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum BlueprintCommands {
    /// List registered blueprints
    List,

    /// Show a blueprint's variables
    Show(BlueprintShowArgs),
}

#[derive(Args, Debug)]
pub struct BlueprintShowArgs {
    /// Blueprint name
    pub name: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Deployment namespace
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Target region
    #[arg(short, long, default_value = "us-east-1")]
    pub region: String,

    /// CFNgin bucket region (default: same as --region)
    #[arg(long)]
    pub bucket_region: Option<String>,

    /// Explicit bucket name
    #[arg(long)]
    pub bucket_name: Option<String>,

    /// KMS key ID or ARN for bucket encryption
    #[arg(long)]
    pub kms_key_id: Option<String>,

    /// Bucket tag as KEY=VALUE (repeatable)
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,

    /// Output file path
    #[arg(short, long, default_value = "cfngin.yaml")]
    pub output: Utf8PathBuf,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

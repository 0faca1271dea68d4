//! CLI parse: clap types for linkpost. No behavior; definitions only.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// linkpost - generate, preview, and publish LinkedIn posts
#[derive(Parser)]
#[command(name = "linkpost")]
#[command(about = "Generate LinkedIn post content and images, preview them, and publish once or on a schedule")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL (overrides config and LINKPOST_BACKEND_URL)
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate post content or an image from a prompt
    Generate {
        #[command(subcommand)]
        command: GenerateCommands,
    },
    /// Show the combined content and image preview
    Preview {
        #[command(flatten)]
        post: PostArgs,
        /// Number of days the post will be scheduled for
        #[arg(long, default_value = "1", allow_hyphen_values = true)]
        days: i64,
    },
    /// Publish a post once
    Post {
        #[command(flatten)]
        post: PostArgs,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Publish a post once per day for a number of days
    Schedule {
        #[command(flatten)]
        post: PostArgs,
        /// Number of days to post for
        #[arg(long, allow_hyphen_values = true)]
        days: i64,
        /// Output format for the final report (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Generate content and image, preview, then post or schedule
    Compose {
        /// Prompt for the post text
        #[arg(long)]
        content_prompt: String,
        /// Prompt for the post image
        #[arg(long)]
        image_prompt: String,
        /// Schedule for this many days instead of posting once
        #[arg(long, allow_hyphen_values = true)]
        days: Option<i64>,
        /// Save a generated image to this path
        #[arg(long)]
        image_output: Option<PathBuf>,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Describe demo mode (used when the backend is unreachable)
    Demo,
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum GenerateCommands {
    /// Generate post text
    Content {
        /// Prompt for the post text
        prompt: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Generate a post image
    Image {
        /// Prompt for the image
        prompt: String,
        /// Where to save a generated image (default: the configured image_path)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show {
        /// Output format (toml or json)
        #[arg(long, default_value = "toml")]
        format: String,
    },
}

/// A previously generated post.
#[derive(Args, Debug, Clone, Default)]
pub struct PostArgs {
    /// Post text
    #[arg(long, conflicts_with = "content_file")]
    pub content: Option<String>,
    /// Read post text from a file
    #[arg(long)]
    pub content_file: Option<PathBuf>,
    /// Image URL or file path
    #[arg(long)]
    pub image: Option<String>,
}

//! CLI command definitions and argument parsing

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(name = "personalens")]
#[command(about = "Heuristic persona analysis of scraped social-media activity")]
#[command(version)]
pub struct Cli {
    /// Enable verbose debug logging (default: configured level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (default: config.toml, then config.example.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a user's posts and comments from a JSON file
    Analyze {
        /// Path to a JSON document with `username`, `posts` and `comments`
        input: PathBuf,
        /// Output format (default: from configuration)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Also build a template persona summary
        #[arg(short, long)]
        persona: bool,
    },
    /// Compare the template personas of two users
    Compare {
        /// First user's JSON file
        first: PathBuf,
        /// Second user's JSON file
        second: PathBuf,
        /// Output format (default: from configuration)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
        /// Write the comparison to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the built-in keyword lexicons
    Lexicons {
        /// Only show one lexicon
        #[arg(long, value_enum)]
        category: Option<LexiconKind>,
    },
    /// Show current configuration
    Config,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Human-readable report
    Text,
}

impl OutputFormat {
    /// Parse the configured default, falling back to JSON
    pub fn from_config(format: &str) -> Self {
        match format {
            "text" => Self::Text,
            _ => Self::Json,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexiconKind {
    /// Personality trait keywords
    Personality,
    /// Interest category keywords
    Interests,
    /// MBTI pole indicators
    Mbti,
    /// Social stance keywords used by the persona summary
    SocialViews,
}

impl LexiconKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Personality => "personality",
            Self::Interests => "interests",
            Self::Mbti => "mbti",
            Self::SocialViews => "social_views",
        }
    }
}

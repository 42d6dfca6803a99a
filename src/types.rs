use clap::{Args, Parser, Subcommand};

// === Commit data ===

/// A single commit pulled from the repository log
#[derive(Debug, Clone)]
pub struct Commit {
   /// Short hash (first 7 chars of the content-addressed id)
   pub hash:    String,
   /// Author name
   pub author:  String,
   /// Author date (ISO-8601, as emitted by git)
   pub date:    String,
   /// Raw commit message (full body, may span multiple lines)
   pub message: String,
}

// === Change categories ===

/// Category for changelog entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
   Breaking,
   Feature,
   Fix,
   Performance,
   Refactor,
   Docs,
   Test,
   Chore,
   Other,
}

impl Category {
   /// Display name for changelog section headers
   pub const fn as_str(&self) -> &'static str {
      match self {
         Self::Breaking => "Breaking Changes",
         Self::Feature => "Features",
         Self::Fix => "Bug Fixes",
         Self::Performance => "Performance",
         Self::Refactor => "Refactoring",
         Self::Docs => "Documentation",
         Self::Test => "Tests",
         Self::Chore => "Chores",
         Self::Other => "Other",
      }
   }

   /// Order for rendering (Breaking first, Other last)
   pub const fn render_order() -> &'static [Self] {
      &[
         Self::Breaking,
         Self::Feature,
         Self::Fix,
         Self::Performance,
         Self::Refactor,
         Self::Docs,
         Self::Test,
         Self::Chore,
         Self::Other,
      ]
   }
}

// === CLI ===

#[derive(Parser, Debug)]
#[command(
   name = "changelog",
   version,
   about = "AI powered changelog generator",
   long_about = "Create release notes automatically from your git history.\n\
                 Commits are classified into change categories and rendered\n\
                 as a markdown changelog, optionally polished by an AI pass."
)]
pub struct Cli {
   #[command(subcommand)]
   pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
   /// Initialize changelog configuration
   Init,
   /// Generate a changelog from recent commits
   Generate(GenerateArgs),
   /// Show current configuration
   Show,
}

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
   /// Starting point for the changelog range
   #[arg(long, default_value = "HEAD~10")]
   #[allow(dead_code, reason = "Reserved for future range-based selection")]
   pub since: String,

   /// Ending point for the changelog range
   #[arg(long, default_value = "HEAD")]
   #[allow(dead_code, reason = "Reserved for future range-based selection")]
   pub to: String,

   /// Number of commits to include
   #[arg(long, default_value_t = 10)]
   pub count: usize,

   /// Output file (default from config)
   #[arg(long)]
   pub output: Option<String>,

   /// Use AI to improve commit messages
   #[arg(long)]
   pub ai: bool,
}

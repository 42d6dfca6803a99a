//! The `generate` flow
//!
//! 1. Load configuration
//! 2. Verify the repository and fetch recent commits
//! 3. Optionally rewrite messages via the enhancement API
//! 4. Group by category, print, render markdown, write the output file
//!
//! The markdown document is fully built in memory before the file write,
//! so no partial output is left behind on failure.

use std::collections::HashMap;

use crate::{
   api::AiClient,
   classify::group_by_category,
   config::{CONFIG_PATH, Config},
   error::Result,
   git,
   markdown::{render_markdown, save_markdown},
   style,
   types::{Category, Commit, GenerateArgs},
};

pub fn run_generate(args: &GenerateArgs) -> Result<()> {
   let config = Config::load(CONFIG_PATH)?;

   println!("Generating changelog...");
   println!();
   println!("Project: {}", style::bold(&config.project.name));
   println!("Repository: {}", config.git.repository_path);
   println!();

   git::ensure_repository(&config.git.repository_path)?;
   println!("Opened repository at: {}", config.git.repository_path);
   println!();

   println!("Fetching last {} commits...", args.count);
   let commits = git::get_recent_commits(&config.git.repository_path, args.count)?;
   println!("Found {} commits", style::bold(&commits.len().to_string()));
   println!();

   // Optional enhancement pass. This replaces the commit list rather than
   // mutating it, and must happen before grouping so the on-screen display
   // and the rendered markdown see the same messages.
   let commits = if args.ai { enhance_commits(commits, &config) } else { commits };

   let groups = group_by_category(&commits);
   print_grouped(&groups);

   println!("Generating markdown...");
   let markdown = render_markdown(&commits, &config.project.name, &config.project.version);

   let filename = args
      .output
      .clone()
      .unwrap_or_else(|| config.output.filename.clone());
   save_markdown(&markdown, &filename)?;

   println!("Changelog saved to: {}", style::bold(&filename));
   println!();
   println!("{} Done!", style::success(style::icons::SUCCESS));
   Ok(())
}

/// Run the AI pass when a client can be built; a missing credential skips
/// the pass for the whole run and the original messages flow through.
fn enhance_commits(commits: Vec<Commit>, config: &Config) -> Vec<Commit> {
   match AiClient::new(config) {
      Ok(client) => client.improve_all(&commits),
      Err(e) => {
         eprintln!("{} AI not available: {e}", style::warning(style::icons::WARNING));
         eprintln!("  Continuing without AI enhancement...");
         eprintln!();
         commits
      },
   }
}

/// Display commits grouped by category, in render order, with
/// per-category counts. Empty categories are skipped.
fn print_grouped(groups: &HashMap<Category, Vec<&Commit>>) {
   println!("{}", style::bold("Categorized Commits:"));
   println!();

   for category in Category::render_order() {
      let Some(commits) = groups.get(category) else {
         continue;
      };
      if commits.is_empty() {
         continue;
      }

      println!("{} ({})", style::info(category.as_str()), commits.len());
      println!("{}", style::separator(style::term_width().min(40)));

      for commit in commits {
         println!("  [{}] {}", style::dim(&commit.hash), commit.message);
      }
      println!();
   }
}

//! Markdown changelog rendering
//!
//! Turns a commit list plus project metadata into the final changelog
//! document. Commit messages are cleaned for display here (prefix/scope
//! stripping, capitalization); cleaning is display-only and its output is
//! never fed back into classification. Cleaning is not idempotent and is
//! meant to run once per message.

use chrono::Local;

use crate::{
   classify::group_by_category,
   error::Result,
   types::{Category, Commit},
};

/// Conventional type tokens stripped by the cleaner, checked in this
/// order with first match winning.
const CLEAN_PREFIXES: &[&str] = &["feat", "fix", "docs", "chore", "test", "refactor", "perf"];

/// Clean a raw commit message for display.
///
/// Keeps the first line only, strips a leading conventional type token
/// (`feat:` or the bare token before a `(scope)`), drops the first
/// parenthesized group, trims a leading ": " left behind by scope
/// removal, and capitalizes the first letter.
pub fn clean_commit_message(message: &str) -> String {
   let line = message.lines().next().unwrap_or("");

   // Strip the conventional type token, if any
   let mut rest = line;
   for prefix in CLEAN_PREFIXES {
      if let Some(after) = line.strip_prefix(prefix) {
         if let Some(after_colon) = after.strip_prefix(':') {
            // Only strip when text remains after the token
            if !after_colon.is_empty() {
               rest = after_colon.strip_prefix(' ').unwrap_or(after_colon);
               break;
            }
         } else if after.starts_with('(') {
            // Bare token before a scope; the parens are handled below
            rest = after;
            break;
         }
      }
   }

   // Drop the first parenthesized group, e.g. the "(auth)" in
   // "feat(auth): add login". An unclosed group swallows the remainder.
   let mut result = String::with_capacity(rest.len());
   let mut skipping = false;
   let mut stripped = false;
   for c in rest.chars() {
      if skipping {
         if c == ')' {
            skipping = false;
         }
         continue;
      }
      if c == '(' && !stripped {
         skipping = true;
         stripped = true;
         continue;
      }
      result.push(c);
   }

   // Scope removal can leave a leading ": " behind
   if result.len() > 2 && result.starts_with(": ") {
      result.drain(..2);
   }

   // Capitalize the first letter
   let mut chars = result.chars();
   match chars.next() {
      Some(c) if c.is_ascii_lowercase() => {
         let mut capitalized = String::with_capacity(result.len());
         capitalized.push(c.to_ascii_uppercase());
         capitalized.push_str(chars.as_str());
         capitalized
      },
      _ => result,
   }
}

/// Render the full markdown changelog document.
///
/// Categories appear in `Category::render_order()`; empty categories are
/// omitted entirely. The trailing footer with the total commit count is
/// always present.
pub fn render_markdown(commits: &[Commit], project_name: &str, version: &str) -> String {
   use std::fmt::Write;

   let mut md = format!("# Changelog - {project_name}\n\n");
   let _ = writeln!(md, "## Version {version}");
   let _ = writeln!(md, "**Generated:** {}\n", Local::now().format("%B %-d, %Y"));

   let groups = group_by_category(commits);

   for category in Category::render_order() {
      let Some(bucket) = groups.get(category) else {
         continue;
      };
      if bucket.is_empty() {
         continue;
      }

      let _ = writeln!(md, "### {}\n", category.as_str());
      for commit in bucket {
         let _ = writeln!(md, "- {} ([{}])", clean_commit_message(&commit.message), commit.hash);
      }
      md.push('\n');
   }

   md.push_str("---\n");
   let _ = writeln!(md, "*Total commits: {}*", commits.len());

   md
}

/// Write the rendered document to disk, overwriting any existing file.
/// Callers build the full document in memory before calling this.
pub fn save_markdown(content: &str, filename: &str) -> Result<()> {
   std::fs::write(filename, content)?;
   Ok(())
}

#[cfg(test)]
mod tests {
   use super::*;

   fn commit(hash: &str, message: &str) -> Commit {
      Commit {
         hash:    hash.to_string(),
         author:  "Test Author".to_string(),
         date:    "2024-01-01T00:00:00+00:00".to_string(),
         message: message.to_string(),
      }
   }

   // ========== clean_commit_message Tests ==========

   #[test]
   fn test_clean_strips_prefix_and_capitalizes() {
      assert_eq!(clean_commit_message("fix: resolve crash"), "Resolve crash");
      assert_eq!(clean_commit_message("feat: add login"), "Add login");
      assert_eq!(clean_commit_message("docs: update readme"), "Update readme");
   }

   #[test]
   fn test_clean_truncates_at_newline() {
      assert_eq!(clean_commit_message("feat(auth): add login\nmore text"), "Add login");
   }

   #[test]
   fn test_clean_strips_scope() {
      assert_eq!(clean_commit_message("fix(ui): button alignment"), "Button alignment");
      assert_eq!(clean_commit_message("perf(core): cache lookups"), "Cache lookups");
   }

   #[test]
   fn test_clean_no_prefix() {
      assert_eq!(clean_commit_message("update dependencies"), "Update dependencies");
      assert_eq!(clean_commit_message("Already capitalized"), "Already capitalized");
   }

   #[test]
   fn test_clean_bare_prefix_is_untouched() {
      // Nothing after the token, so nothing is stripped
      assert_eq!(clean_commit_message("feat:"), "Feat:");
   }

   #[test]
   fn test_clean_strips_only_first_paren_group() {
      assert_eq!(
         clean_commit_message("update (the) readme (again)"),
         "Update  readme (again)"
      );
   }

   #[test]
   fn test_clean_unclosed_paren_swallows_rest() {
      assert_eq!(clean_commit_message("revert (half done"), "Revert ");
   }

   #[test]
   fn test_clean_empty_message() {
      assert_eq!(clean_commit_message(""), "");
   }

   // ========== render_markdown Tests ==========

   #[test]
   fn test_render_end_to_end() {
      let commits = vec![
         commit("a1", "feat: add search"),
         commit("b2", "fix(ui): button alignment"),
         commit("c3", "docs: update readme"),
      ];

      let md = render_markdown(&commits, "Demo", "1.0");

      assert!(md.starts_with("# Changelog - Demo\n\n## Version 1.0\n"));
      assert!(md.contains("**Generated:** "));
      assert!(md.contains("### Features\n\n- Add search ([a1])\n"));
      assert!(md.contains("### Bug Fixes\n\n- Button alignment ([b2])\n"));
      assert!(md.contains("### Documentation\n\n- Update readme ([c3])\n"));
      assert!(md.ends_with("---\n*Total commits: 3*\n"));

      // Sections come out in render order
      let features = md.find("### Features").unwrap();
      let fixes = md.find("### Bug Fixes").unwrap();
      let docs = md.find("### Documentation").unwrap();
      assert!(features < fixes && fixes < docs);
   }

   #[test]
   fn test_render_omits_empty_categories() {
      let commits = vec![commit("a1", "feat: add search")];
      let md = render_markdown(&commits, "Demo", "1.0");

      assert!(md.contains("### Features"));
      assert!(!md.contains("### Bug Fixes"));
      assert!(!md.contains("### Other"));
   }

   #[test]
   fn test_render_breaking_first() {
      let commits = vec![
         commit("a1", "chore: bump deps"),
         commit("b2", "feat!: drop legacy api"),
      ];
      let md = render_markdown(&commits, "Demo", "1.0");

      let breaking = md.find("### Breaking Changes").unwrap();
      let chores = md.find("### Chores").unwrap();
      assert!(breaking < chores);
   }

   #[test]
   fn test_render_footer_always_present() {
      let md = render_markdown(&[], "Demo", "1.0");
      assert!(md.ends_with("---\n*Total commits: 0*\n"));
      // No category headers at all for an empty commit list
      assert!(!md.contains("### "));
   }
}

//! Commit message classification
//!
//! Maps each commit message to exactly one change category using ordered
//! rule precedence: breaking-change markers, then conventional commit
//! prefixes, then keyword fallbacks. Classification is total and
//! deterministic; every message lands in a category.

use std::collections::HashMap;

use crate::types::{Category, Commit};

/// Conventional prefixes checked by rule 2, paired with their category.
/// Order matters: first match wins.
const PREFIX_RULES: &[(&str, Category)] = &[
   ("feat", Category::Feature),
   ("fix", Category::Fix),
   ("docs", Category::Docs),
   ("perf", Category::Performance),
   ("refactor", Category::Refactor),
   ("test", Category::Test),
   ("chore", Category::Chore),
];

/// Keyword fallbacks checked by rule 3 (case-insensitive substring).
const KEYWORD_RULES: &[(&[&str], Category)] = &[
   (&["add", "implement", "create", "new"], Category::Feature),
   (&["fix", "bug", "issue", "resolve"], Category::Fix),
   (&["update", "improve"], Category::Refactor),
];

/// Classify a commit message into a category.
///
/// Note the breaking-change rule matches a `!` anywhere in the message,
/// not just the conventional `feat!:` marker position, so any message
/// with an exclamation mark is Breaking.
pub fn classify(message: &str) -> Category {
   // Rule 1: breaking-change markers (case-sensitive), checked first so
   // a message matching both this and a conventional prefix is Breaking
   if message.contains("BREAKING CHANGE") || message.contains("BREAKING:") || message.contains('!')
   {
      return Category::Breaking;
   }

   // Rule 2: conventional commit prefixes
   for &(prefix, category) in PREFIX_RULES {
      if has_conventional_prefix(message, prefix) {
         return category;
      }
   }

   // Rule 3: keyword fallback over the whole message
   let lower = message.to_lowercase();
   for &(keywords, category) in KEYWORD_RULES {
      if keywords.iter().any(|k| lower.contains(k)) {
         return category;
      }
   }

   Category::Other
}

/// Check for `prefix:`, `prefix(`, or `prefix!` at the start of the message
fn has_conventional_prefix(message: &str, prefix: &str) -> bool {
   message
      .strip_prefix(prefix)
      .and_then(|rest| rest.chars().next())
      .is_some_and(|c| matches!(c, ':' | '(' | '!'))
}

/// Partition commits into per-category buckets, preserving input order
/// within each bucket.
pub fn group_by_category(commits: &[Commit]) -> HashMap<Category, Vec<&Commit>> {
   let mut groups: HashMap<Category, Vec<&Commit>> = HashMap::new();

   for commit in commits {
      groups.entry(classify(&commit.message)).or_default().push(commit);
   }

   groups
}

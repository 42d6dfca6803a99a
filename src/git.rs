use std::process::Command;

use crate::{
   error::{ChangelogError, Result},
   types::Commit,
};

// Record/field separators for the git log pretty format below
const RECORD_SEP: char = '\u{1e}';
const FIELD_SEP: char = '\0';

/// Verify that `path` is inside a git repository
pub fn ensure_repository(path: &str) -> Result<()> {
   let output = Command::new("git")
      .args(["rev-parse", "--git-dir"])
      .current_dir(path)
      .output()
      .map_err(|e| ChangelogError::GitError(format!("Failed to run git rev-parse: {e}")))?;

   if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(ChangelogError::GitError(format!(
         "not a git repository at {path}: {}",
         stderr.trim()
      )));
   }

   Ok(())
}

/// Fetch the last `count` commits from the checked-out head, in log order
/// (reverse-chronological). The bound is pushed down into `git log -N`.
pub fn get_recent_commits(path: &str, count: usize) -> Result<Vec<Commit>> {
   // Short hash, author name, author date, full message body; git expands
   // %x00/%x1e so multi-line messages survive the field/record split
   let format = "--pretty=format:%h%x00%an%x00%aI%x00%B%x1e";

   let output = Command::new("git")
      .args(["log", &format!("-{count}"), format])
      .current_dir(path)
      .output()
      .map_err(|e| ChangelogError::GitError(format!("Failed to run git log: {e}")))?;

   if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(ChangelogError::GitError(format!("git log failed: {}", stderr.trim())));
   }

   parse_log_output(&String::from_utf8_lossy(&output.stdout))
}

/// Parse the NUL/0x1e-delimited log output into commits
fn parse_log_output(stdout: &str) -> Result<Vec<Commit>> {
   let mut commits = Vec::new();

   for record in stdout.split(RECORD_SEP) {
      let record = record.trim_start_matches('\n');
      if record.is_empty() {
         continue;
      }

      let mut fields = record.splitn(4, FIELD_SEP);
      let (Some(hash), Some(author), Some(date), Some(message)) =
         (fields.next(), fields.next(), fields.next(), fields.next())
      else {
         return Err(ChangelogError::GitError(format!(
            "unexpected git log record: {}",
            record.chars().take(80).collect::<String>()
         )));
      };

      commits.push(Commit {
         hash:    hash.to_string(),
         author:  author.to_string(),
         date:    date.to_string(),
         message: message.trim_end_matches('\n').to_string(),
      });
   }

   Ok(commits)
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_parse_log_output_single() {
      let raw = "a1b2c3d\0Jane Doe\02024-03-01T12:00:00+01:00\0feat: add search\n\u{1e}";
      let commits = parse_log_output(raw).unwrap();
      assert_eq!(commits.len(), 1);
      assert_eq!(commits[0].hash, "a1b2c3d");
      assert_eq!(commits[0].author, "Jane Doe");
      assert_eq!(commits[0].date, "2024-03-01T12:00:00+01:00");
      assert_eq!(commits[0].message, "feat: add search");
   }

   #[test]
   fn test_parse_log_output_multiline_message() {
      let raw = "a1b2c3d\0Jane\02024-03-01T12:00:00+01:00\0feat: add search\n\nLonger \
                 body.\n\u{1e}\ne4f5a6b\0Joe\02024-02-28T09:30:00+01:00\0fix: crash\n\u{1e}";
      let commits = parse_log_output(raw).unwrap();
      assert_eq!(commits.len(), 2);
      assert_eq!(commits[0].message, "feat: add search\n\nLonger body.");
      assert_eq!(commits[1].hash, "e4f5a6b");
      assert_eq!(commits[1].message, "fix: crash");
   }

   #[test]
   fn test_parse_log_output_empty() {
      assert!(parse_log_output("").unwrap().is_empty());
   }

   #[test]
   fn test_parse_log_output_malformed_record() {
      let raw = "only-a-hash\u{1e}";
      assert!(parse_log_output(raw).is_err());
   }
}

//! Enhancement client for commit messages
//!
//! One blocking request per commit against an OpenAI-compatible
//! `/chat/completions` endpoint. Best effort: a failed request falls back
//! to the locally cleaned message for that commit only, and a missing
//! credential skips the pass entirely.

use std::time::Duration;

use crate::{
   config::Config,
   error::{ChangelogError, Result},
   markdown::clean_commit_message,
   style,
   types::Commit,
};

/// Default endpoint; override with `CHANGELOG_API_URL`
const DEFAULT_API_URL: &str = "http://localhost:4000";

const REQUEST_TIMEOUT_SECS: u64 = 120;
const CONNECT_TIMEOUT_SECS: u64 = 30;

pub struct AiClient {
   client:       reqwest::blocking::Client,
   api_base_url: String,
   api_key:      String,
   model:        String,
}

impl AiClient {
   /// Build a client from config and environment. Fails when
   /// `CHANGELOG_API_KEY` is unset; the caller is expected to skip the
   /// enhancement pass in that case.
   pub fn new(config: &Config) -> Result<Self> {
      let api_key =
         std::env::var("CHANGELOG_API_KEY").map_err(|_| ChangelogError::MissingApiKey)?;
      let api_base_url =
         std::env::var("CHANGELOG_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

      let client = reqwest::blocking::Client::builder()
         .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
         .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
         .build()
         .expect("Failed to build HTTP client");

      Ok(Self { client, api_base_url, api_key, model: config.ai.model.clone() })
   }

   /// Rewrite every commit message, returning a new commit list.
   ///
   /// Sequential, one request per commit, no retries. A per-commit
   /// failure keeps that commit with its locally cleaned message and
   /// processing continues. Old and new messages are echoed so the
   /// originals stay visible.
   pub fn improve_all(&self, commits: &[Commit]) -> Vec<Commit> {
      println!("Using AI to improve commit messages...");
      println!();

      let mut improved = Vec::with_capacity(commits.len());

      for (i, commit) in commits.iter().enumerate() {
         println!("  Processing {}/{}: {}", i + 1, commits.len(), style::dim(&commit.hash));

         let message = match self.improve_message(&commit.message) {
            Ok(new_msg) => new_msg,
            Err(e) => {
               eprintln!(
                  "  {} {e} (using cleaned original)",
                  style::warning(style::icons::WARNING)
               );
               clean_commit_message(&commit.message)
            },
         };

         let old = commit.message.lines().next().unwrap_or("");
         println!("    {} {}", style::error("-"), style::dim(old));
         println!("    {} {}", style::success("+"), message);

         improved.push(Commit { message, ..commit.clone() });
      }

      println!();
      println!("{} AI processing complete!", style::success(style::icons::SUCCESS));
      println!();

      improved
   }

   /// One request: raw commit message in, rewritten one-liner out.
   fn improve_message(&self, message: &str) -> Result<String> {
      let request_body = serde_json::json!({
         "model": self.model,
         "max_tokens": 100,
         "messages": [{
            "role": "user",
            "content": build_prompt(message)
         }]
      });

      let response = self
         .client
         .post(format!("{}/chat/completions", self.api_base_url))
         .header("content-type", "application/json")
         .header("Authorization", format!("Bearer {}", self.api_key))
         .json(&request_body)
         .send()
         .map_err(ChangelogError::HttpError)?;

      let status = response.status();
      if !status.is_success() {
         let body = response
            .text()
            .unwrap_or_else(|_| "Unknown error".to_string());
         return Err(ChangelogError::ApiError { status: status.as_u16(), body });
      }

      let api_response: serde_json::Value = response.json().map_err(ChangelogError::HttpError)?;
      extract_content(&api_response)
   }
}

/// Fixed instruction template wrapped around the raw commit message
fn build_prompt(message: &str) -> String {
   format!(
      r#"You are helping to create a changelog.

Given this git commit message: "{message}"

Please improve it to be:
1. Clear and user-friendly (for non-technical users)
2. Focused on WHAT changed, not HOW
3. One sentence, under 80 characters
4. Start with a capital letter

Just respond with the improved message, nothing else."#
   )
}

/// Pull the single text field out of the completion response
fn extract_content(response: &serde_json::Value) -> Result<String> {
   response["choices"][0]["message"]["content"]
      .as_str()
      .map(|s| s.trim().to_string())
      .ok_or_else(|| ChangelogError::Other("No content in API response".to_string()))
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_build_prompt_embeds_message() {
      let prompt = build_prompt("fix: null pointer");
      assert!(prompt.contains("\"fix: null pointer\""));
      assert!(prompt.contains("under 80 characters"));
      assert!(prompt.ends_with("nothing else."));
   }

   #[test]
   fn test_extract_content() {
      let response = serde_json::json!({
         "choices": [{
            "message": { "content": "  Fixed a crash on startup  " }
         }]
      });
      assert_eq!(extract_content(&response).unwrap(), "Fixed a crash on startup");
   }

   #[test]
   fn test_extract_content_missing_field() {
      let response = serde_json::json!({ "choices": [] });
      assert!(extract_content(&response).is_err());
   }
}

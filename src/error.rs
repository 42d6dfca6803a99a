use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChangelogError {
   #[error("Failed to load config: {0}")]
   ConfigError(String),

   #[error("Git command failed: {0}")]
   GitError(String),

   #[error("API request failed (HTTP {status}): {body}")]
   ApiError { status: u16, body: String },

   #[error("CHANGELOG_API_KEY environment variable not set")]
   MissingApiKey,

   #[error("IO error: {0}")]
   IoError(#[from] std::io::Error),

   #[error("HTTP error: {0}")]
   HttpError(#[from] reqwest::Error),

   #[error("{0}")]
   Other(String),
}

impl ChangelogError {
   /// One-line remediation hint printed under fatal errors.
   pub const fn hint(&self) -> Option<&'static str> {
      match self {
         Self::ConfigError(_) => Some("Tip: Run 'changelog init' to create a config file"),
         Self::GitError(_) => Some("Make sure you're in a git repository!"),
         Self::IoError(_) => Some("Check that the output path is writable"),
         _ => None,
      }
   }
}

pub type Result<T> = std::result::Result<T, ChangelogError>;

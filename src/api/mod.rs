//! Clients for the external metadata and inference services.
//!
//! Both speak JSON over HTTPS through a shared retry layer. The git snapshot
//! path deliberately does not go through here; clones get exactly one
//! attempt (see `repo::snapshot`).

mod github;
mod http;
mod inference;
mod types;

pub use github::{GithubClient, RepoUrl};
pub use inference::InferenceClient;
pub use types::RepoMetadata;

//! Azure CLI interaction.
//!
//! - [`api`] - the [`AzureApi`] trait and its `az` backed implementation
//! - [`cli`] - command execution and JSON parsing
//! - [`error`] - the [`AzError`] type

mod api;
pub mod cli;
mod error;

// Re-export public types and functions
pub use api::{AzCli, AzureApi};
pub use error::{AzError, AzResult};

//! code-to-docs action library.
//!
//! Entry point logic for the GitHub Action that asks an AI model which docs
//! need updating for a pull request.

pub mod action;
pub mod bootstrap;
pub mod command;
pub mod config;
pub mod context;
pub mod error;
pub mod invoker;
pub mod redact;
pub mod report;

pub use error::Error;

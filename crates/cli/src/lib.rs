//! Command-line front end for docset content bundles.
//!
//! Every command loads a [`docset::Registry`] through a
//! [`context::CommandContext`] and prints a [`output::CommandResult`]
//! envelope in the requested format.

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod output;
pub mod project;
pub mod render;
pub mod styles;

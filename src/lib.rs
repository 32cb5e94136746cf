//! votebot - A Discord bot that runs song votes from a single bound channel.
//!
//! This crate provides:
//! - Prefix-command routing with channel scoping and role-based authorization
//! - Runtime settings (bound channel, master role, vote limits) persisted as JSON
//! - Placeholder song and voting commands for the catalog

pub mod bot;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod repository;
pub mod service;

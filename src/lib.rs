//! mediabin: a client for a media upload server.
//!
//! The crate splits into pure rules and effectful shells. [`media`] holds the
//! rules: batch validation, MIME guessing, and preview planning, all plain
//! functions over plain data. [`session`] owns the workflow state and drives
//! those rules through two ports: [`client::Transport`] for the HTTP side and
//! [`notify::Notifier`] for user feedback. [`cli`] and [`commands`] are the
//! terminal front end over that session.

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod media;
pub mod notify;
pub mod session;

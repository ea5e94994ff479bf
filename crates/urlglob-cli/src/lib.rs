//! urlglob CLI library.
//!
//! This crate provides the command implementations and logging setup for the
//! `urlglob` binary.

pub mod commands;
pub mod logging;

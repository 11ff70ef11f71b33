//! `ferrite` subcommand implementations.

pub mod doctor;
pub mod encrypt;
pub mod env2payload;

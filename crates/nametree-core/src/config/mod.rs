//! Configuration management for nametree.
//!
//! The starting tree shape and display preferences ([`settings::Config`])
//! are stored as a TOML file and loaded at startup.

pub mod settings;

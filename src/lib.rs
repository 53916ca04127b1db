//! clip - copy text as plain text, Markdown, HTML or JSON
//!
//! This crate converts selected text into one of several output formats,
//! writes the result to the system clipboard and keeps a short, persisted
//! history of recent copies.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Format converters, the text cleaner, history values and errors
//! - **Application**: The copy use case, the history store and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (arboard, wl-copy, notify-rust, JSON file storage)
//! - **CLI**: Command-line interface, argument parsing and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

//! site-builder CLI library
//!
//! Command implementations behind the `site-builder` binary. Each command
//! renders its output to a `String` so it can be tested without a terminal.

#![forbid(unsafe_code)]

pub mod commands;

pub use commands::{CategoriesCommand, SelectCommand, ServeCommand, TemplatesCommand};

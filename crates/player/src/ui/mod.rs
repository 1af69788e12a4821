//! Line-oriented front end
//!
//! Stands in for the form's widget toolkit: commands in, text out.

pub mod command;
pub mod shell;

pub use command::{Command, CommandError};
pub use shell::{execute, run, Flow};

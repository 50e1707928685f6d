//! Command handlers, one module per subcommand.

pub mod completions;
pub mod init;

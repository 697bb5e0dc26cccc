mod handlers;
mod parser;

pub use handlers::{USAGE, handle_command};
pub use parser::{Command, CommandStatus, parse_command};

use crate::commands::parser::{Command, CommandStatus};
use crate::storage::AppFiles;

use log::{error, info};
use std::fs;
use std::io::Write;

pub const USAGE: &str = "\
Usage: app-files <command> [args]

Commands:
  root                                  Print the app root directory
  save <file> <text> [subfolder]        Save text to a file
  load <file> [subfolder]               Print a text file
  put <file> <source> [subfolder]       Copy a local file into the store
  get <file> <destination> [subfolder]  Copy a stored file out of the store
  list [subfolder] [pattern]            List files matching a pattern
";

// Handle a single command against the store, writing output to `out`
pub fn handle_command(files: &AppFiles, command: Command, out: &mut impl Write) -> CommandStatus {
    let status = match command {
        Command::Root => handle_cmd_root(files, out),
        Command::Save {
            file_name,
            content,
            subfolder,
        } => handle_cmd_save(files, &file_name, &content, &subfolder),
        Command::Load {
            file_name,
            subfolder,
        } => handle_cmd_load(files, &file_name, &subfolder, out),
        Command::Put {
            file_name,
            source,
            subfolder,
        } => handle_cmd_put(files, &file_name, &source, &subfolder),
        Command::Get {
            file_name,
            destination,
            subfolder,
        } => handle_cmd_get(files, &file_name, &destination, &subfolder),
        Command::List { subfolder, pattern } => handle_cmd_list(files, &subfolder, &pattern, out),
        Command::Help => write_output(out, USAGE),
        Command::Unknown(raw) => match write_output(out, USAGE) {
            CommandStatus::Success => CommandStatus::Failure(format!("Unknown command: {}", raw)),
            CommandStatus::Failure(reason) => {
                CommandStatus::Failure(format!("Unknown command: {} ({})", raw, reason))
            }
        },
    };

    if let CommandStatus::Failure(reason) = &status {
        error!("{}", reason);
    }
    status
}

fn write_output(out: &mut impl Write, text: &str) -> CommandStatus {
    match out.write_all(text.as_bytes()) {
        Ok(()) => CommandStatus::Success,
        Err(e) => CommandStatus::Failure(format!("Failed to write output: {}", e)),
    }
}

// Command handler for ROOT
fn handle_cmd_root(files: &AppFiles, out: &mut impl Write) -> CommandStatus {
    write_output(out, &format!("{}\n", files.app_root_path().display()))
}

// Command handler for SAVE
fn handle_cmd_save(files: &AppFiles, file_name: &str, content: &str, subfolder: &str) -> CommandStatus {
    match files.try_save_text(file_name, content, subfolder) {
        Ok(saved) => {
            info!("Saved {}", saved.file_path.display());
            CommandStatus::Success
        }
        Err(e) => CommandStatus::Failure(format!("Unable to save {}: {}", file_name, e)),
    }
}

// Command handler for LOAD
fn handle_cmd_load(
    files: &AppFiles,
    file_name: &str,
    subfolder: &str,
    out: &mut impl Write,
) -> CommandStatus {
    match files.try_load_text(file_name, subfolder) {
        Ok(text) => write_output(out, &text),
        Err(e) => CommandStatus::Failure(format!("Unable to load {}: {}", file_name, e)),
    }
}

// Command handler for PUT
fn handle_cmd_put(files: &AppFiles, file_name: &str, source: &str, subfolder: &str) -> CommandStatus {
    let content = match fs::read(source) {
        Ok(content) => content,
        Err(e) => return CommandStatus::Failure(format!("Unable to read {}: {}", source, e)),
    };

    match files.try_save_binary(file_name, &content, subfolder) {
        Ok(saved) => {
            info!(
                "Stored {} bytes from {} at {}",
                saved.bytes_written,
                source,
                saved.file_path.display()
            );
            CommandStatus::Success
        }
        Err(e) => CommandStatus::Failure(format!("Unable to store {}: {}", file_name, e)),
    }
}

// Command handler for GET
fn handle_cmd_get(
    files: &AppFiles,
    file_name: &str,
    destination: &str,
    subfolder: &str,
) -> CommandStatus {
    let content = match files.try_load_binary(file_name, subfolder) {
        Ok(content) => content,
        Err(e) => return CommandStatus::Failure(format!("Unable to load {}: {}", file_name, e)),
    };

    match fs::write(destination, &content) {
        Ok(()) => {
            info!("Copied {} bytes to {}", content.len(), destination);
            CommandStatus::Success
        }
        Err(e) => CommandStatus::Failure(format!("Unable to write {}: {}", destination, e)),
    }
}

// Command handler for LIST
fn handle_cmd_list(
    files: &AppFiles,
    subfolder: &str,
    pattern: &str,
    out: &mut impl Write,
) -> CommandStatus {
    let listing = match files.try_list_directory(subfolder, pattern) {
        Ok(listing) => listing,
        Err(e) => return CommandStatus::Failure(format!("Unable to list {:?}: {}", subfolder, e)),
    };

    let mut text = String::new();
    for entry in &listing.entries {
        text.push_str(&entry.display().to_string());
        text.push('\n');
    }
    write_output(out, &text)
}

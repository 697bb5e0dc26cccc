// Command enum to represent command-line requests
#[derive(Debug, PartialEq)]
pub enum Command {
    Root,
    Save {
        file_name: String,
        content: String,
        subfolder: String,
    },
    Load {
        file_name: String,
        subfolder: String,
    },
    Put {
        file_name: String,
        source: String,
        subfolder: String,
    },
    Get {
        file_name: String,
        destination: String,
        subfolder: String,
    },
    List {
        subfolder: String,
        pattern: String,
    },
    Help,
    Unknown(String),
}

#[derive(Debug, PartialEq)]
pub enum CommandStatus {
    Success,
    Failure(String),
}

fn arg(args: &[String], index: usize) -> Option<String> {
    args.get(index).cloned()
}

fn arg_or(args: &[String], index: usize, default: &str) -> String {
    arg(args, index).unwrap_or_else(|| default.to_string())
}

// Parse command-line arguments (without the program name) into a Command
pub fn parse_command(args: &[String]) -> Command {
    let Some(first) = args.first() else {
        return Command::Help;
    };
    let cmd = first.to_ascii_lowercase();

    match (cmd.as_str(), args.len()) {
        ("root", 1) => Command::Root,
        ("save", 3 | 4) => Command::Save {
            file_name: args[1].clone(),
            content: args[2].clone(),
            subfolder: arg_or(args, 3, ""),
        },
        ("load", 2 | 3) => Command::Load {
            file_name: args[1].clone(),
            subfolder: arg_or(args, 2, ""),
        },
        ("put", 3 | 4) => Command::Put {
            file_name: args[1].clone(),
            source: args[2].clone(),
            subfolder: arg_or(args, 3, ""),
        },
        ("get", 3 | 4) => Command::Get {
            file_name: args[1].clone(),
            destination: args[2].clone(),
            subfolder: arg_or(args, 3, ""),
        },
        ("list", 1..=3) => Command::List {
            subfolder: arg_or(args, 1, ""),
            pattern: arg_or(args, 2, "*"),
        },
        ("help" | "-h" | "--help", _) => Command::Help,
        _ => Command::Unknown(args.join(" ")),
    }
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ScrollDown(u32),
    ScrollUp(u32),
    ScrollToEnd,
    LoadMore,
    Toggle(String),
    Remove(String),
    List,
    Selected,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command `{0}`; type `help` for a list")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("`{0}` is not a pixel count")]
    InvalidNumber(String),
}

pub const HELP: &str = "\
commands:
  scroll <px>    scroll the list down
  up <px>        scroll the list up
  end            scroll to the bottom of the list
  more           load the next page
  toggle <name>  select or deselect an item
  remove <name>  remove an item from the selection
  list           show the visible part of the list
  selected       show the selection
  status         show loading state
  help           show this text
  quit           leave";

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "scroll" | "down" => Command::ScrollDown(pixels("scroll", rest)?),
        "up" => Command::ScrollUp(pixels("up", rest)?),
        "end" => Command::ScrollToEnd,
        "more" => Command::LoadMore,
        "toggle" | "t" => Command::Toggle(name("toggle", rest)?),
        "remove" | "rm" => Command::Remove(name("remove", rest)?),
        "list" | "ls" => Command::List,
        "selected" | "sel" => Command::Selected,
        "status" => Command::Status,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };
    Ok(Some(command))
}

fn pixels(command: &'static str, arg: &str) -> Result<u32, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument(command));
    }
    arg.parse()
        .map_err(|_| CommandError::InvalidNumber(arg.to_string()))
}

fn name(command: &'static str, arg: &str) -> Result<String, CommandError> {
    if arg.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(arg.to_string())
    }
}

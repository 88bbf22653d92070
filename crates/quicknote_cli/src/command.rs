//! Line command parsing for the terminal surface.

/// One user action typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New,
    Open(usize),
    Title(String),
    Body(String),
    Save,
    Delete,
    Reload,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  new             create a blank note and open it
  open <n>        open note number <n> from the list (unsaved edits are dropped)
  title <text>    set the title of the open note
  body <text>     set the content of the open note (`\\n` starts a new line)
  save            save the open note
  delete          delete the open note
  reload          fetch the note list again
  help            show this help
  quit            exit";

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim_start();
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest),
        None => (line.trim_end(), ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "new" | "n" => Command::New,
        "open" | "o" => {
            let index = rest
                .trim()
                .parse::<usize>()
                .map_err(|_| format!("`open` expects a list number, got `{}`", rest.trim()))?;
            if index == 0 {
                return Err("list numbers start at 1".to_string());
            }
            Command::Open(index)
        }
        "title" | "t" => Command::Title(rest.to_string()),
        "body" | "b" => Command::Body(rest.replace("\\n", "\n")),
        "save" | "s" => Command::Save,
        "delete" | "d" => Command::Delete,
        "reload" | "r" => Command::Reload,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => return Err(format!("unknown command `{other}`; type `help`")),
    };
    Ok(Some(command))
}

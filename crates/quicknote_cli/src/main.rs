//! Terminal entry point for QuickNote.
//!
//! # Responsibility
//! - Fail fast when store credentials are missing.
//! - Render the notes page and map typed commands onto controller actions.
//! - Show write failures as alerts; the controller keeps state unchanged.

mod command;
mod render;

use command::{parse_command, Command, HELP};
use log::{info, warn};
use quicknote_core::{
    connect_controller, init_logging_from_env, ActionOutcome, NotesController, NoteRepository,
    StoreConfig,
};
use render::render_page;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config = match StoreConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("quicknote: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_logging_from_env() {
        eprintln!("quicknote: file logging disabled: {err}");
    }

    let mut controller = match connect_controller(&config) {
        Ok(controller) => controller,
        Err(err) => {
            eprintln!("quicknote: {err}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        "event=cli_start module=cli status=ok version={}",
        quicknote_core::core_version()
    );

    controller.load().await;
    print!("{}", render_page(controller.state()));
    println!("type `help` for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                warn!("event=cli_input module=cli status=error error={err}");
                break;
            }
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            other => {
                if let Some(notice) = run_command(&mut controller, other).await {
                    println!("{notice}");
                }
            }
        }
        print!("{}", render_page(controller.state()));
    }

    info!("event=cli_exit module=cli status=ok");
    ExitCode::SUCCESS
}

async fn run_command<R: NoteRepository>(
    controller: &mut NotesController<R>,
    command: Command,
) -> Option<String> {
    let outcome = match command {
        Command::New => controller.create().await,
        Command::Open(index) => {
            let id = controller.state().notes.get(index - 1).map(|note| note.id);
            return match id {
                Some(id) => {
                    controller.select(id);
                    None
                }
                None => Some(format!("no note number {index}")),
            };
        }
        Command::Title(value) => {
            controller.edit_title(value);
            return no_selection_hint(controller);
        }
        Command::Body(value) => {
            controller.edit_content(value);
            return no_selection_hint(controller);
        }
        Command::Save => controller.save().await,
        Command::Delete => controller.delete_selected().await,
        Command::Reload => {
            controller.load().await;
            return None;
        }
        Command::Help | Command::Quit => return None,
    };

    match outcome {
        ActionOutcome::Completed => None,
        ActionOutcome::Failed { reason } => Some(format!("! alert: {reason}")),
        ActionOutcome::Ignored => Some("no note is open".to_string()),
    }
}

fn no_selection_hint<R: NoteRepository>(controller: &NotesController<R>) -> Option<String> {
    if controller.state().edit_buffer.is_none() {
        Some("no note is open".to_string())
    } else {
        None
    }
}

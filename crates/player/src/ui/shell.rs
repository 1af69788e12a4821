//! Interactive shell
//!
//! Reads one command per line, applies it to the form session, and reports
//! the result. The sheet itself is drawn by the session's renderer; the shell
//! only writes prompts, confirmations, and errors.

use std::io::{self, Write};

use sheetkeep_domain::RemovalOutcome;

use crate::application::services::CharacterSheetService;
use crate::application::ServiceError;
use crate::infrastructure::terminal::LineSource;
use crate::ui::command::{Command, CommandError, HELP};

const PROMPT: &str = "sheet> ";

/// Whether the shell keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run until `quit` or end of input.
pub async fn run<R, W>(
    service: &mut CharacterSheetService,
    input: &mut R,
    output: &mut W,
) -> io::Result<()>
where
    R: LineSource,
    W: Write,
{
    writeln!(output, "Type 'help' for commands.")?;
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(err @ CommandError::Unknown(_)) => {
                writeln!(output, "{err}\n{HELP}")?;
                continue;
            }
            Err(err) => {
                writeln!(output, "{err}")?;
                continue;
            }
        };

        if execute(service, command, output).await? == Flow::Quit {
            break;
        }
    }
    Ok(())
}

/// Apply one command. Service errors are reported to `output`, not returned.
pub async fn execute<W: Write>(
    service: &mut CharacterSheetService,
    command: Command,
    output: &mut W,
) -> io::Result<Flow> {
    let result = match command {
        Command::Show(None) => {
            service.render_all();
            Ok(())
        }
        Command::Show(Some(kind)) => {
            service.render_section(kind);
            Ok(())
        }
        Command::SetInfo { index, value } => service.set_character_info(index, value),
        Command::Add { kind, values } => {
            service.add_entry(kind, values);
            Ok(())
        }
        Command::Set {
            kind,
            row,
            field,
            value,
        } => service.set_entry_value(kind, row, field, value),
        Command::Remove { kind, row } => match service.remove_entry_at(kind, row) {
            Ok(RemovalOutcome::Removed { .. }) => {
                writeln!(output, "Removed {} row {}.", kind.label(), row + 1)?;
                Ok(())
            }
            Ok(outcome) => {
                writeln!(output, "Kept {} row {}.", outcome.kind().label(), row + 1)?;
                Ok(())
            }
            Err(err) => Err(err),
        },
        Command::Save => match service.save().await {
            Ok(location) => {
                writeln!(output, "Saved to {location}")?;
                Ok(())
            }
            Err(err) => Err(err),
        },
        Command::Load(file) => {
            let result = match file {
                Some(file) => service.load_from(file).await,
                None => service.load().await,
            };
            match result {
                Ok(_) => {
                    writeln!(output, "Loaded {}", service.file_name())?;
                    Ok(())
                }
                Err(err) => Err(err),
            }
        }
        Command::New => {
            service.reset();
            Ok(())
        }
        Command::Help => {
            writeln!(output, "{HELP}")?;
            Ok(())
        }
        Command::Quit => return Ok(Flow::Quit),
    };

    if let Err(err) = result {
        report(&err, output)?;
    }
    Ok(Flow::Continue)
}

fn report<W: Write>(err: &ServiceError, output: &mut W) -> io::Result<()> {
    tracing::warn!(error = %err, "Command failed");
    if err.is_not_found() {
        writeln!(output, "No saved sheet found ({err})")
    } else if err.is_malformed_document() {
        writeln!(output, "Not a character sheet, nothing was changed ({err})")
    } else {
        writeln!(output, "Error: {err}")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;

    use sheetkeep_domain::SectionKind;

    use super::*;
    use crate::ports::outbound::{
        MockConfirmPort, MockDocumentStorePort, MockRenderPort, StoreError,
    };

    fn session(confirm: MockConfirmPort, store: MockDocumentStorePort) -> CharacterSheetService {
        let mut renderer = MockRenderPort::new();
        renderer.expect_render_character_info().return_const(());
        renderer.expect_render_section().return_const(());
        let mut service = CharacterSheetService::new(
            Arc::new(confirm),
            Arc::new(store),
            Arc::new(renderer),
            "character.json",
        );
        service.on_form_activated();
        service
    }

    async fn drive(service: &mut CharacterSheetService, script: &str) -> String {
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        run(service, &mut input, &mut output).await.expect("io");
        String::from_utf8(output).expect("utf8")
    }

    #[tokio::test]
    async fn edits_flow_through_to_the_record() {
        let mut confirm = MockConfirmPort::new();
        confirm.expect_confirm().times(1).return_const(true);
        let mut service = session(confirm, MockDocumentStorePort::new());

        drive(
            &mut service,
            "info 1 Mira\n\
             add attacks Claw|Melee|STR|+5|1d6+3\n\
             remove attacks 1\n\
             set attacks 1 4 +6\n",
        )
        .await;

        let record = service.record();
        assert_eq!(record.character_info()[0], "Mira");
        assert_eq!(
            record.section(SectionKind::Attacks).rows(),
            vec![vec!["Claw", "Melee", "STR", "+6", "1d6+3"]]
        );
    }

    #[tokio::test]
    async fn quit_stops_reading() {
        let mut service = session(MockConfirmPort::new(), MockDocumentStorePort::new());

        drive(&mut service, "quit\nadd skills Stealth\n").await;

        assert_eq!(service.record().section(SectionKind::Skills).len(), 1);
    }

    #[tokio::test]
    async fn unknown_commands_print_help() {
        let mut service = session(MockConfirmPort::new(), MockDocumentStorePort::new());

        let output = drive(&mut service, "roll d20\n").await;

        assert!(output.contains("Unknown command: roll"));
        assert!(output.contains("Commands:"));
    }

    #[tokio::test]
    async fn errors_are_reported_and_the_shell_keeps_going() {
        let mut store = MockDocumentStorePort::new();
        store
            .expect_read_bytes()
            .returning(|name| Err(StoreError::NotFound(name.to_string())));
        let mut service = session(MockConfirmPort::new(), store);

        let output = drive(&mut service, "load\nremove skills 9\nadd skills Stealth\n").await;

        assert!(output.contains("No saved sheet found"));
        assert!(output.contains("skills has no row 9"));
        assert_eq!(service.record().section(SectionKind::Skills).len(), 2);
    }

    #[tokio::test]
    async fn declined_removal_is_reported() {
        let mut confirm = MockConfirmPort::new();
        confirm.expect_confirm().return_const(false);
        let mut service = session(confirm, MockDocumentStorePort::new());

        let output = drive(&mut service, "remove inventory 1\n").await;

        assert!(output.contains("Kept Inventory row 1."));
        assert_eq!(service.record().section(SectionKind::Inventory).len(), 1);
    }

    #[tokio::test]
    async fn save_reports_the_location() {
        let mut store = MockDocumentStorePort::new();
        store
            .expect_write_bytes()
            .returning(|name, _| Ok(format!("/sheets/{name}")));
        let mut service = session(MockConfirmPort::new(), store);

        let output = drive(&mut service, "save\n").await;

        assert!(output.contains("Saved to /sheets/character.json"));
    }
}

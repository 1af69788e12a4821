//! Terminal adapters
//!
//! Line-oriented stand-ins for the form's widgets: a yes/no prompt for
//! [`ConfirmPort`] and a plain-text printer for [`RenderPort`].

use std::io::{self, BufRead, Write};
use std::sync::{Mutex, PoisonError};

use sheetkeep_domain::{CharacterRecord, Section, CHARACTER_INFO_FIELDS};

use crate::ports::outbound::{ConfirmPort, RenderPort};

// =============================================================================
// Line input
// =============================================================================

/// Something that hands out one line of user input at a time.
///
/// Both the shell and the confirm prompt read through this, so they never
/// hold competing buffers over the same stream.
pub trait LineSource: Send {
    /// Append the next line to `buf`. `Ok(0)` means end of input.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

/// Process stdin, locked only for the duration of each read.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinLines;

impl LineSource for StdinLines {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::stdin().read_line(buf)
    }
}

impl<T: AsRef<[u8]> + Send> LineSource for io::Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

// =============================================================================
// Confirm
// =============================================================================

/// Interpret a typed answer. Only an explicit yes counts.
pub fn parse_answer(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Yes/no prompt on a terminal. Defaults to "no".
pub struct TerminalConfirm<R = StdinLines, W = io::Stdout> {
    io: Mutex<(R, W)>,
}

impl TerminalConfirm {
    /// Prompt on stdout, answer from stdin.
    pub fn stdio() -> Self {
        Self::new(StdinLines, io::stdout())
    }
}

impl<R: LineSource, W: Write + Send> TerminalConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            io: Mutex::new((input, output)),
        }
    }

    pub fn into_parts(self) -> (R, W) {
        self.io.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: LineSource, W: Write + Send> ConfirmPort for TerminalConfirm<R, W> {
    fn confirm(&self, message: &str) -> bool {
        let mut io = self.io.lock().unwrap_or_else(PoisonError::into_inner);
        let (input, output) = &mut *io;

        if let Err(e) = write!(output, "{message} [y/N] ").and_then(|()| output.flush()) {
            tracing::warn!(error = %e, "Failed to show confirmation prompt");
            return false;
        }

        let mut answer = String::new();
        match input.read_line(&mut answer) {
            Ok(0) => false,
            Ok(_) => parse_answer(&answer),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read confirmation answer");
                false
            }
        }
    }
}

// =============================================================================
// Render
// =============================================================================

/// Prints the sheet as plain text.
///
/// Rows and fields are numbered from 1, matching what the shell accepts.
pub struct TerminalRenderer<W = io::Stdout> {
    out: Mutex<W>,
}

impl TerminalRenderer {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, text: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
            tracing::warn!(error = %e, "Failed to render character sheet");
        }
    }
}

/// Text for the character info block.
pub fn format_character_info(record: &CharacterRecord) -> String {
    let mut text = String::from("== Character Info ==\n");
    for (i, (label, value)) in CHARACTER_INFO_FIELDS
        .iter()
        .zip(record.character_info())
        .enumerate()
    {
        text.push_str(&format!("{:>2}. {label}: {value}\n", i + 1));
    }
    text
}

/// Text for one section.
pub fn format_section(section: &Section) -> String {
    let kind = section.kind();
    let schema = section.schema();
    let mut text = format!("== {} ({}) ==\n", kind.label(), section.len());

    for (row, entry) in section.entries().iter().enumerate() {
        if schema.multiline {
            text.push_str(&format!("[{}]\n", row + 1));
            for value in entry.values() {
                for line in value.lines() {
                    text.push_str(&format!("    {line}\n"));
                }
            }
        } else {
            let fields: Vec<String> = entry
                .fields()
                .map(|(label, value)| format!("{label}: {value}"))
                .collect();
            text.push_str(&format!("[{}] {}\n", row + 1, fields.join(" | ")));
        }
    }
    text
}

impl<W: Write + Send> RenderPort for TerminalRenderer<W> {
    fn render_character_info(&self, record: &CharacterRecord) {
        self.emit(&format_character_info(record));
    }

    fn render_section(&self, section: &Section) {
        self.emit(&format_section(section));
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use sheetkeep_domain::{AlwaysConfirm, EntryCollectionManager, SectionKind};

    use super::*;

    mod confirm {
        use super::*;

        fn ask(input: &str) -> (bool, String) {
            let confirm = TerminalConfirm::new(Cursor::new(input.to_string()), Vec::new());
            let answer = confirm.confirm("Remove it?");
            let (_, output) = confirm.into_parts();
            (answer, String::from_utf8(output).expect("utf8"))
        }

        #[test]
        fn yes_confirms() {
            assert_eq!(ask("y\n"), (true, "Remove it? [y/N] ".to_string()));
            assert!(ask("YES\n").0);
        }

        #[test]
        fn anything_else_declines() {
            assert!(!ask("n\n").0);
            assert!(!ask("\n").0);
            assert!(!ask("yep\n").0);
        }

        #[test]
        fn end_of_input_declines() {
            assert!(!ask("").0);
        }

        #[test]
        fn answers_are_read_one_line_at_a_time() {
            let confirm = TerminalConfirm::new(Cursor::new("y\nn\n"), Vec::new());
            assert!(confirm.confirm("first"));
            assert!(!confirm.confirm("second"));
        }
    }

    mod render {
        use super::*;

        #[test]
        fn character_info_lists_every_field_numbered() {
            let mut record = CharacterRecord::new();
            record.set_character_info(0, "Mira").expect("in range");

            let text = format_character_info(&record);

            assert!(text.contains(" 1. Character Name: Mira\n"));
            assert!(text.contains("17. Charisma: \n"));
        }

        #[test]
        fn fields_are_labelled_on_one_line() {
            let manager = EntryCollectionManager::new(AlwaysConfirm);
            let mut record = CharacterRecord::new();
            manager.add_attack(&mut record, ["Claw", "Melee"]);

            let text = format_section(record.section(SectionKind::Attacks));

            assert_eq!(
                text,
                "== Attacks (1) ==\n\
                 [1] Attack Name: Claw | Type: Melee | Ability Used:  | Attack Bonus:  | Damage: \n"
            );
        }

        #[test]
        fn notes_are_indented_line_by_line() {
            let manager = EntryCollectionManager::new(AlwaysConfirm);
            let mut record = CharacterRecord::new();
            manager.add_gm_note(&mut record, ["Secret door\nbehind the bar"]);

            let text = format_section(record.section(SectionKind::GmNotes));

            assert_eq!(
                text,
                "== GM Notes (1) ==\n[1]\n    Secret door\n    behind the bar\n"
            );
        }

        #[test]
        fn renderer_writes_to_its_output() {
            let renderer = TerminalRenderer::new(Vec::new());
            let record = CharacterRecord::new();

            renderer.render_section(record.section(SectionKind::Skills));

            let text = String::from_utf8(renderer.into_inner()).expect("utf8");
            assert_eq!(text, "== Skills (0) ==\n");
        }
    }
}

//! Terminal-backed workbench.
//!
//! Prompts and pickers are plain line-oriented exchanges on the given reader
//! and writer. Host settings come from the editor's `settings.json`. Commands
//! are not executed here: each one is printed as `run <command-id>` for an
//! editor-side bridge to pick up.

use std::io::{BufRead, Write};

use layout_presets::{EditorSettings, PickItem, Result, Workbench, WorkbenchCommand, WorkbenchError};

/// Prefix of emitted command lines.
pub const COMMAND_PREFIX: &str = "run ";

/// A `Workbench` speaking over a line-oriented terminal.
pub struct TerminalWorkbench<R, W> {
    input: R,
    output: W,
    settings: EditorSettings,
}

impl<R: BufRead, W: Write> TerminalWorkbench<R, W> {
    /// Creates a workbench reading answers from `input` and writing to `output`.
    pub fn new(input: R, output: W, settings: EditorSettings) -> Self {
        Self {
            input,
            output,
            settings,
        }
    }

    /// Consumes the workbench, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one line without its terminator. `None` on end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(WorkbenchError::Interaction)?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn write_str(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(WorkbenchError::Interaction)?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Workbench for TerminalWorkbench<R, W> {
    fn prompt_text(&mut self, prompt: &str) -> Result<Option<String>> {
        self.write_str(&format!("{}: ", prompt))?;
        self.read_line()
    }

    fn pick(&mut self, placeholder: &str, items: &[PickItem]) -> Result<Option<usize>> {
        let mut menu = format!("{}\n", placeholder);
        for (i, item) in items.iter().enumerate() {
            match &item.detail {
                Some(detail) => menu.push_str(&format!("  {}) {}  ({})\n", i + 1, item.label, detail)),
                None => menu.push_str(&format!("  {}) {}\n", i + 1, item.label)),
            }
        }
        self.write_str(&menu)?;

        loop {
            self.write_str(&format!("Select [1-{}] (blank to cancel): ", items.len()))?;
            let Some(answer) = self.read_line()? else {
                return Ok(None);
            };
            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(None);
            }
            match answer.parse::<usize>() {
                Ok(n) if (1..=items.len()).contains(&n) => return Ok(Some(n - 1)),
                _ => {
                    tracing::debug!("Rejected selection {:?}", answer);
                    self.write_str(&format!("Invalid selection: {}\n", answer))?;
                }
            }
        }
    }

    fn show_info(&mut self, message: &str) -> Result<()> {
        self.write_str(&format!("{}\n", message))
    }

    fn setting(&self, key: &str) -> Option<String> {
        self.settings.get_str(key).map(String::from)
    }

    fn execute(&mut self, command: WorkbenchCommand) -> Result<()> {
        tracing::info!("Emitting workbench command {}", command.id());
        self.write_str(&format!("{}{}\n", COMMAND_PREFIX, command.id()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_presets::PanelPosition;
    use std::io::Cursor;

    fn workbench(input: &str) -> TerminalWorkbench<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalWorkbench::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            EditorSettings::default(),
        )
    }

    fn output_of(workbench: TerminalWorkbench<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(workbench.into_output()).expect("utf-8 output")
    }

    fn items() -> Vec<PickItem> {
        vec![
            PickItem::new("A").with_detail("2026-10-19 08:30:00"),
            PickItem::new("B"),
        ]
    }

    #[test]
    fn prompt_reads_line_without_newline() {
        let mut wb = workbench("Focus\r\n");
        let answer = wb.prompt_text("Name").expect("prompt");
        assert_eq!(answer.as_deref(), Some("Focus"));
        assert_eq!(output_of(wb), "Name: ");
    }

    #[test]
    fn prompt_at_eof_is_declined() {
        let mut wb = workbench("");
        assert_eq!(wb.prompt_text("Name").expect("prompt"), None);
    }

    #[test]
    fn prompt_blank_line_is_empty_string() {
        let mut wb = workbench("\n");
        assert_eq!(wb.prompt_text("Name").expect("prompt").as_deref(), Some(""));
    }

    #[test]
    fn pick_renders_numbered_menu() {
        let mut wb = workbench("2\n");
        let choice = wb.pick("Saved layout presets", &items()).expect("pick");
        assert_eq!(choice, Some(1));
        let out = output_of(wb);
        assert!(out.starts_with("Saved layout presets\n"));
        assert!(out.contains("  1) A  (2026-10-19 08:30:00)\n"));
        assert!(out.contains("  2) B\n"));
    }

    #[test]
    fn pick_retries_after_invalid_answer() {
        let mut wb = workbench("9\nx\n1\n");
        assert_eq!(wb.pick("Pick", &items()).expect("pick"), Some(0));
        let out = output_of(wb);
        assert!(out.contains("Invalid selection: 9"));
        assert!(out.contains("Invalid selection: x"));
    }

    #[test]
    fn pick_blank_or_eof_is_declined() {
        let mut wb = workbench("\n");
        assert_eq!(wb.pick("Pick", &items()).expect("pick"), None);
        let mut wb = workbench("");
        assert_eq!(wb.pick("Pick", &items()).expect("pick"), None);
    }

    #[test]
    fn execute_emits_command_line() {
        let mut wb = workbench("");
        wb.execute(WorkbenchCommand::MovePanel(PanelPosition::Left))
            .expect("execute");
        wb.execute(WorkbenchCommand::TogglePanelVisibility)
            .expect("execute");
        assert_eq!(
            output_of(wb),
            "run workbench.action.positionPanelLeft\nrun workbench.action.togglePanel\n"
        );
    }

    #[test]
    fn setting_reads_editor_settings() {
        let settings = EditorSettings::parse(r#"{ "workbench.sideBar.location": "right" }"#)
            .expect("parse");
        let wb = TerminalWorkbench::new(Cursor::new(Vec::new()), Vec::new(), settings);
        assert_eq!(
            wb.setting("workbench.sideBar.location").as_deref(),
            Some("right")
        );
        assert_eq!(wb.setting("workbench.panel.location"), None);
    }
}

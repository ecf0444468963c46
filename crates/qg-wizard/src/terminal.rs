// terminal.rs — Terminal-based Prompter.
//
// Renders questions to a writer and reads answers line by line from a
// reader. `TerminalPrompter::stdio()` binds to the real terminal; tests pass
// in-memory I/O instead. An invalid choice is reported and asked again; a
// yes/no answer that is not a yes counts as no. End of input is an error.

use std::io::{BufRead, BufReader, IsTerminal, Read, Write};
use std::sync::Mutex;

use crate::error::PromptError;
use crate::prompt::{Notification, NotificationLevel, Prompter};

/// A Prompter that uses a line-oriented reader/writer pair.
pub struct TerminalPrompter {
    reader: Mutex<BufReader<Box<dyn Read + Send>>>,
    writer: Mutex<Box<dyn Write + Send>>,
    interactive: bool,
}

impl TerminalPrompter {
    /// Create a prompter from raw reader/writer. Interactive by default.
    pub fn new(reader: Box<dyn Read + Send>, writer: Box<dyn Write + Send>) -> Self {
        Self {
            reader: Mutex::new(BufReader::new(reader)),
            writer: Mutex::new(writer),
            interactive: true,
        }
    }

    /// Bind to stdin/stdout. Interactive only when stdin is a terminal.
    pub fn stdio() -> Self {
        let interactive = std::io::stdin().is_terminal();
        Self::new(Box::new(std::io::stdin()), Box::new(std::io::stdout()))
            .with_interactive(interactive)
    }

    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    fn write(&self, text: &str) -> Result<(), PromptError> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| PromptError::InvalidResponse(format!("writer lock poisoned: {}", e)))?;
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn read_line(&self) -> Result<String, PromptError> {
        let mut line = String::new();
        let mut reader = self
            .reader
            .lock()
            .map_err(|e| PromptError::InvalidResponse(format!("reader lock poisoned: {}", e)))?;
        if reader.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim().to_string())
    }

    fn render_choice(label: &str, candidates: &[String]) -> String {
        let mut out = format!("\n {}:\n", label);
        for (index, candidate) in candidates.iter().enumerate() {
            out.push_str(&format!("  [{}] {}\n", index, candidate));
        }
        out.push_str(" > ");
        out
    }

    fn render_confirm(question: &str, default: bool) -> String {
        let default = if default { "yes" } else { "no" };
        format!("\n {} (yes/no) [{}]:\n > ", question, default)
    }

    /// Map an answer to one of the candidates, by index or by exact name.
    fn parse_choice(input: &str, candidates: &[String]) -> Option<String> {
        if let Some(found) = candidates.iter().find(|c| c.as_str() == input) {
            return Some(found.clone());
        }
        input
            .parse::<usize>()
            .ok()
            .and_then(|index| candidates.get(index).cloned())
    }

    /// Empty input takes `default`; otherwise only an answer starting with
    /// `y` is a yes.
    fn parse_confirm(input: &str, default: bool) -> bool {
        if input.is_empty() {
            default
        } else {
            input.to_lowercase().starts_with('y')
        }
    }

    fn render_notification(notification: &Notification) -> String {
        let prefix = match notification.level {
            NotificationLevel::Note => " ! [NOTE]",
            NotificationLevel::Info => " [INFO]",
            NotificationLevel::Success => " [OK]",
            NotificationLevel::Warning => " [WARNING]",
            NotificationLevel::Error => " [ERROR]",
        };
        format!("\n{} {}\n", prefix, notification.message)
    }
}

impl Prompter for TerminalPrompter {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn choose(&self, label: &str, candidates: &[String]) -> Result<String, PromptError> {
        if candidates.is_empty() {
            return Err(PromptError::InvalidResponse(
                "no candidates to choose from".into(),
            ));
        }

        loop {
            self.write(&Self::render_choice(label, candidates))?;
            let answer = self.read_line()?;
            match Self::parse_choice(&answer, candidates) {
                Some(choice) => return Ok(choice),
                None => self.write(&format!(" [ERROR] Value \"{}\" is invalid\n", answer))?,
            }
        }
    }

    fn confirm(&self, question: &str, default: bool) -> Result<bool, PromptError> {
        self.write(&Self::render_confirm(question, default))?;
        let answer = self.read_line()?;
        Ok(Self::parse_confirm(&answer, default))
    }

    fn notify(&self, notification: &Notification) -> Result<(), PromptError> {
        self.write(&Self::render_notification(notification))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::Arc;

    fn mock_prompter(input: &str) -> (TerminalPrompter, Arc<Mutex<Vec<u8>>>) {
        let output_buf = Arc::new(Mutex::new(Vec::new()));

        struct SharedWriter(Arc<Mutex<Vec<u8>>>);
        impl Write for SharedWriter {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().write(buf)
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let reader = Box::new(Cursor::new(input.as_bytes().to_vec()));
        let writer = Box::new(SharedWriter(output_buf.clone()));
        (TerminalPrompter::new(reader, writer), output_buf)
    }

    fn rendered(output: &Arc<Mutex<Vec<u8>>>) -> String {
        String::from_utf8(output.lock().unwrap().clone()).unwrap()
    }

    fn tasks() -> Vec<String> {
        vec!["composer".into(), "phpcs".into(), "phpunit".into()]
    }

    #[test]
    fn choose_by_index() {
        let (prompter, output) = mock_prompter("1\n");
        let choice = prompter.choose("Which task?", &tasks()).unwrap();
        assert_eq!(choice, "phpcs");

        let text = rendered(&output);
        assert!(text.contains("Which task?:"));
        assert!(text.contains("[0] composer"));
        assert!(text.contains("[2] phpunit"));
    }

    #[test]
    fn choose_by_name() {
        let (prompter, _) = mock_prompter("phpunit\n");
        assert_eq!(prompter.choose("Which task?", &tasks()).unwrap(), "phpunit");
    }

    #[test]
    fn choose_reasks_on_invalid_answer() {
        let (prompter, output) = mock_prompter("phpmd\n7\n\n0\n");
        assert_eq!(prompter.choose("Which task?", &tasks()).unwrap(), "composer");

        let text = rendered(&output);
        assert!(text.contains("Value \"phpmd\" is invalid"));
        assert!(text.contains("Value \"7\" is invalid"));
        assert_eq!(text.matches("Which task?:").count(), 4);
    }

    #[test]
    fn choose_eof_is_closed() {
        let (prompter, _) = mock_prompter("");
        let result = prompter.choose("Which task?", &tasks());
        assert!(matches!(result, Err(PromptError::Closed)));
    }

    #[test]
    fn choose_without_candidates_fails() {
        let (prompter, _) = mock_prompter("0\n");
        assert!(prompter.choose("Which task?", &[]).is_err());
    }

    #[test]
    fn confirm_empty_uses_default() {
        let (prompter, output) = mock_prompter("\n\n");
        assert!(!prompter.confirm("Overwrite?", false).unwrap());
        assert!(prompter.confirm("Continue?", true).unwrap());

        let text = rendered(&output);
        assert!(text.contains("Overwrite? (yes/no) [no]:"));
        assert!(text.contains("Continue? (yes/no) [yes]:"));
    }

    #[test]
    fn confirm_accepts_yes_and_no_variants() {
        let (prompter, _) = mock_prompter("y\nYES\nn\nNo\n");
        assert!(prompter.confirm("Q?", false).unwrap());
        assert!(prompter.confirm("Q?", false).unwrap());
        assert!(!prompter.confirm("Q?", true).unwrap());
        assert!(!prompter.confirm("Q?", true).unwrap());
    }

    #[test]
    fn confirm_anything_but_yes_is_no() {
        let (prompter, output) = mock_prompter("maybe\nok\nyep\n");
        assert!(!prompter.confirm("Q?", true).unwrap());
        assert!(!prompter.confirm("Q?", false).unwrap());
        assert!(prompter.confirm("Q?", false).unwrap());
        assert_eq!(rendered(&output).matches("Q? (yes/no)").count(), 3);
    }

    #[test]
    fn confirm_eof_is_closed() {
        let (prompter, _) = mock_prompter("");
        assert!(matches!(
            prompter.confirm("Q?", true),
            Err(PromptError::Closed)
        ));
    }

    #[test]
    fn notify_prefixes() {
        let (prompter, output) = mock_prompter("");
        prompter.notify(&Notification::success("configured")).unwrap();
        prompter.notify(&Notification::warning("skipped")).unwrap();
        prompter.notify(&Notification::error("failed")).unwrap();
        prompter.notify(&Notification::note("no interaction")).unwrap();

        let text = rendered(&output);
        assert!(text.contains(" [OK] configured"));
        assert!(text.contains(" [WARNING] skipped"));
        assert!(text.contains(" [ERROR] failed"));
        assert!(text.contains(" ! [NOTE] no interaction"));
    }

    #[test]
    fn interactivity_flag() {
        let (prompter, _) = mock_prompter("");
        assert!(prompter.is_interactive());
        assert!(!prompter.with_interactive(false).is_interactive());
    }
}

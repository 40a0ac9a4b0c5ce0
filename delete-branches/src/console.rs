use std::io::Write;

const PREFIX: &str = "[delete-branches]";

/// Destination for the messages the user reads while the pipeline runs.
pub struct Console<'a> {
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Self { out, err }
    }

    pub fn say(&mut self, message: impl AsRef<str>) {
        // A closed stdout should not abort deletions already under way.
        let _ = writeln!(self.out, "{PREFIX} {}", message.as_ref());
        let _ = self.out.flush();
    }

    pub fn warn(&mut self, message: impl AsRef<str>) {
        let _ = writeln!(self.err, "{PREFIX} {}", message.as_ref());
        let _ = self.err.flush();
    }
}

/// Prompt title with the same prefix as every other message.
pub fn prefixed(message: &str) -> String {
    format!("{PREFIX} {message}")
}

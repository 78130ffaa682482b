//! Where reports are rendered.

/// Destination stream of a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Line sink for reports.
///
/// Implementors only decide where a line goes; the provided methods fix
/// the layout so every sink renders the same text.
pub trait Output {
    fn write_line(&mut self, stream: Stream, line: &str);

    fn section(&mut self, name: &str) {
        self.write_line(Stream::Stdout, &format!("{name}:"));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.write_line(Stream::Stdout, &format!("{key}: {value}"));
    }

    fn list_item(&mut self, text: &str) {
        self.write_line(Stream::Stdout, &format!("  - {text}"));
    }

    /// Warnings and errors, kept off stdout so `--json` stays parseable.
    fn diagnostic(&mut self, text: &str) {
        self.write_line(Stream::Stderr, text);
    }

    fn divider(&mut self, label: &str) {
        self.write_line(Stream::Stdout, &format!("── {label} ──"));
    }

    fn preformatted(&mut self, text: &str) {
        self.write_line(Stream::Stdout, text);
    }

    fn newline(&mut self) {
        self.write_line(Stream::Stdout, "");
    }
}

/// Command result that knows how to present itself.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn write_line(&mut self, stream: Stream, line: &str) {
        match stream {
            Stream::Stdout => println!("{line}"),
            Stream::Stderr => eprintln!("{line}"),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{Output, Stream};

    /// Collects rendered lines, tagging stderr lines with `! `.
    #[derive(Default)]
    pub struct Recorder(pub Vec<String>);

    impl Output for Recorder {
        fn write_line(&mut self, stream: Stream, line: &str) {
            match stream {
                Stream::Stdout => self.0.push(line.to_string()),
                Stream::Stderr => self.0.push(format!("! {line}")),
            }
        }
    }
}

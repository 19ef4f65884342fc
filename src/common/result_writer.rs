use colored::Colorize;

/// Sink for everything a command prints.
pub trait ResultWriter {
    /// A value produced by a query (`TRUE`, a popped value, ...).
    fn write_value(&mut self, value: &str);
    /// Informational text such as the help listing.
    fn write_message(&mut self, message: &str);
    /// A non-fatal error to report to the user.
    fn write_error(&mut self, message: &str);
}

/// Writes results to stdout, highlighting errors when colour is enabled.
pub struct CliResultWriter {
    color: bool,
}

impl CliResultWriter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl Default for CliResultWriter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ResultWriter for CliResultWriter {
    fn write_value(&mut self, value: &str) {
        println!("{}", value);
    }

    fn write_message(&mut self, message: &str) {
        println!("{}", message);
    }

    fn write_error(&mut self, message: &str) {
        println!("{}", self.format_error(message));
    }
}

impl CliResultWriter {
    fn format_error(&self, message: &str) -> String {
        if self.color {
            message.red().to_string()
        } else {
            message.to_string()
        }
    }
}

/// Collects output in memory, one entry per line written.
#[derive(Debug, Default)]
pub struct BufferedResultWriter {
    lines: Vec<String>,
    errors: Vec<String>,
}

impl BufferedResultWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line in the order it was written, errors included.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.errors.clear();
    }
}

impl ResultWriter for BufferedResultWriter {
    fn write_value(&mut self, value: &str) {
        self.lines.push(value.to_string());
    }

    fn write_message(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }

    fn write_error(&mut self, message: &str) {
        self.lines.push(message.to_string());
        self.errors.push(message.to_string());
    }
}

/// Console output of one process
///
/// Every line is recorded so callers (and tests) can inspect what was
/// reported; when echoing, `INFO` lines go to stdout and `ERROR` lines to
/// stderr.
#[derive(Debug, Default)]
pub struct Output {
    lines: Vec<String>,
    echo: bool,
}

impl Output {
    /// Output echoing to stdout/stderr
    pub fn stdio() -> Self {
        Self {
            lines: Vec::new(),
            echo: true,
        }
    }

    /// Output that only records lines
    pub fn buffered() -> Self {
        Self::default()
    }

    pub fn info(&mut self, message: impl AsRef<str>) {
        let line = format!("INFO  {}", message.as_ref());
        if self.echo {
            println!("\n  {line}\n");
        }
        self.lines.push(line);
    }

    pub fn error(&mut self, message: impl AsRef<str>) {
        let line = format!("ERROR  {}", message.as_ref());
        if self.echo {
            eprintln!("\n  {line}\n");
        }
        self.lines.push(line);
    }

    /// Plain line without a status badge
    pub fn line(&mut self, message: impl Into<String>) {
        let line = message.into();
        if self.echo {
            println!("{line}");
        }
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

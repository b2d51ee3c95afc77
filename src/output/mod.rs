pub mod json;
pub mod text;

use serde::Serialize;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn emit<T: Serialize>(&self, text_line: &str, json_value: &T) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => text::print_line(text_line),
            OutputMode::Json => json::print(json_value),
        }
    }

    /// Text mode prints each line in order; JSON mode prints the value once.
    pub fn emit_lines<T: Serialize>(&self, lines: &[String], json_value: &T) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => lines.iter().try_for_each(|line| text::print_line(line)),
            OutputMode::Json => json::print(json_value),
        }
    }

    /// Writes a whole document (e.g. a rendered page) verbatim in text mode.
    pub fn emit_document<T: Serialize>(&self, document: &str, json_value: &T) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => text::print_document(document),
            OutputMode::Json => json::print(json_value),
        }
    }
}

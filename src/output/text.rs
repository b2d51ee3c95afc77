use std::io::{self, Write};

use crate::error::AppResult;

pub fn print_line(line: &str) -> AppResult<()> {
    println!("{line}");
    Ok(())
}

pub fn print_document(document: &str) -> AppResult<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(document.as_bytes())?;
    if !document.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}

//! Terminal plumbing for the menu: line prompts, message rendering and the
//! contact table. Input comes through a `BufRead` so the whole menu can be
//! scripted in tests.

use cardfile::commands::{CmdMessage, MessageLevel};
use cardfile::model::Contact;
use cardfile::store::fs::DELIMITER;
use colored::*;
use std::io::{self, BufRead, Write};
use unicode_width::UnicodeWidthStr;

/// Read one line, without the trailing newline. `None` means end of input.
pub fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Print `label: ` and read the reply.
pub fn prompt_line(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{}: ", label);
    io::stdout().flush()?;
    read_line(input)
}

/// Prompt for a free-text field value. Re-prompts while the reply contains
/// the field delimiter, which the store cannot represent.
pub fn prompt_field(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    loop {
        let Some(value) = prompt_line(input, label)? else {
            return Ok(None);
        };
        if value.contains(DELIMITER) {
            println!(
                "{}",
                format!("The '{}' character cannot be stored; try again.", DELIMITER).yellow()
            );
            continue;
        }
        return Ok(Some(value));
    }
}

/// Prompt for an optional replacement of `current`. A blank reply means
/// "keep the current value" and comes back as `None`.
pub fn prompt_field_keeping(
    input: &mut impl BufRead,
    label: &str,
    current: &str,
) -> io::Result<Option<Option<String>>> {
    let label = format!("{} [{}]", label, current);
    let Some(value) = prompt_field(input, &label)? else {
        return Ok(None);
    };
    if value.is_empty() {
        Ok(Some(None))
    } else {
        Ok(Some(Some(value)))
    }
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const HEADERS: [&str; 4] = ["ID", "NAME", "PHONE", "EMAIL"];

/// Render contacts as a width-aligned table. An empty slice renders as a
/// plain "(no contacts)" marker; callers wanting a different empty-state
/// message print it themselves.
pub fn print_contacts(contacts: &[Contact]) {
    if contacts.is_empty() {
        println!("(no contacts)");
        return;
    }

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.width()).collect();
    let rows: Vec<[String; 4]> = contacts
        .iter()
        .map(|c| {
            [
                c.id.to_string(),
                c.name.clone(),
                c.phone.clone(),
                c.email.clone(),
            ]
        })
        .collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let header: Vec<String> = HEADERS
        .iter()
        .enumerate()
        .map(|(i, h)| pad(h, widths[i]))
        .collect();
    println!("{}", header.join("  ").bold());
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    println!("{}", rule.join("  ").dimmed());

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| pad(cell, widths[i]))
            .collect();
        println!("{}", cells.join("  "));
    }
}

fn pad(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

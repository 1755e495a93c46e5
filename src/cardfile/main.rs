use cardfile::api::{ContactBook, SortKey};
use cardfile::commands::ContactUpdate;
use cardfile::config::CardfileConfig;
use cardfile::error::{CardfileError, Result};
use cardfile::store::fs::FileStore;
use cardfile::store::Storage;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::io::{self, BufRead};
use std::path::PathBuf;

mod args;
mod console;

use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = FileStore::new(resolve_data_file(&cli)?);

    let (mut book, warnings) = ContactBook::load(store)?;
    console::print_messages(&warnings);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    menu_loop(&mut book, &mut input)
}

/// Data file precedence: `--file` flag, then the configured override, then
/// `contacts.txt` in the platform data directory.
fn resolve_data_file(cli: &Cli) -> Result<PathBuf> {
    if let Some(file) = &cli.file {
        return Ok(file.clone());
    }

    let proj_dirs = ProjectDirs::from("com", "cardfile", "cardfile")
        .ok_or_else(|| CardfileError::Store("Could not determine a data directory".to_string()))?;
    let config = CardfileConfig::load(proj_dirs.config_dir()).unwrap_or_default();

    Ok(config
        .data_file
        .clone()
        .unwrap_or_else(|| proj_dirs.data_dir().join("contacts.txt")))
}

fn print_menu() {
    println!();
    println!("{}", "Cardfile".bold());
    println!("  1. Add contact");
    println!("  2. List contacts");
    println!("  3. Edit contact");
    println!("  4. Delete contact");
    println!("  5. Search contacts");
    println!("  0. Exit");
}

fn menu_loop<S: Storage>(book: &mut ContactBook<S>, input: &mut impl BufRead) -> Result<()> {
    loop {
        print_menu();
        let Some(choice) = console::prompt_line(input, "Choose an option")? else {
            // End of input counts as a normal exit.
            return Ok(());
        };

        match choice.trim() {
            "1" => handle_add(book, input)?,
            "2" => handle_list(book, input)?,
            "3" => handle_edit(book, input)?,
            "4" => handle_delete(book, input)?,
            "5" => handle_search(book, input)?,
            "0" => {
                println!("Bye!");
                return Ok(());
            }
            other => println!("{}", format!("Unknown option: '{}'", other).red()),
        }
    }
}

fn handle_add<S: Storage>(book: &mut ContactBook<S>, input: &mut impl BufRead) -> Result<()> {
    let Some(name) = console::prompt_field(input, "Name")? else {
        return Ok(());
    };
    let Some(phone) = console::prompt_field(input, "Phone")? else {
        return Ok(());
    };
    let Some(email) = console::prompt_field(input, "Email")? else {
        return Ok(());
    };

    let result = book.add(name, phone, email)?;
    console::print_messages(&result.messages);
    Ok(())
}

fn handle_list<S: Storage>(book: &ContactBook<S>, input: &mut impl BufRead) -> Result<()> {
    let Some(reply) = console::prompt_line(input, "Sort by (id/name/phone/email, blank for file order)")?
    else {
        return Ok(());
    };

    let sort = if reply.trim().is_empty() {
        None
    } else {
        match reply.parse::<SortKey>() {
            Ok(key) => Some(key),
            Err(e) => {
                println!("{}", format!("{}; listing in file order.", e).yellow());
                None
            }
        }
    };

    let result = book.list(sort)?;
    console::print_contacts(&result.listed);
    Ok(())
}

fn handle_edit<S: Storage>(book: &mut ContactBook<S>, input: &mut impl BufRead) -> Result<()> {
    let Some(id) = prompt_id(input)? else {
        return Ok(());
    };
    let Some(current) = book.get(id).cloned() else {
        println!("{}", format!("Contact not found: #{}", id).yellow());
        return Ok(());
    };

    println!("Leave a field blank to keep the current value.");
    let Some(name) = console::prompt_field_keeping(input, "Name", &current.name)? else {
        return Ok(());
    };
    let Some(phone) = console::prompt_field_keeping(input, "Phone", &current.phone)? else {
        return Ok(());
    };
    let Some(email) = console::prompt_field_keeping(input, "Email", &current.email)? else {
        return Ok(());
    };

    let update = ContactUpdate::new(name, phone, email);
    report(book.edit(id, &update))
}

fn handle_delete<S: Storage>(book: &mut ContactBook<S>, input: &mut impl BufRead) -> Result<()> {
    let Some(id) = prompt_id(input)? else {
        return Ok(());
    };
    let Some(contact) = book.get(id).cloned() else {
        println!("{}", format!("Contact not found: #{}", id).yellow());
        return Ok(());
    };

    let label = format!("Delete '{}' (#{})? [y/N]", contact.name, contact.id);
    let Some(reply) = console::prompt_line(input, &label)? else {
        return Ok(());
    };
    if !reply.trim().eq_ignore_ascii_case("y") {
        println!("Cancelled.");
        return Ok(());
    }

    report(book.delete(id))
}

fn handle_search<S: Storage>(book: &ContactBook<S>, input: &mut impl BufRead) -> Result<()> {
    let Some(term) = console::prompt_line(input, "Search text (name/phone/email)")? else {
        return Ok(());
    };

    let result = book.search(&term)?;
    if result.listed.is_empty() {
        println!("No matching contacts.");
    } else {
        console::print_contacts(&result.listed);
    }
    Ok(())
}

fn prompt_id(input: &mut impl BufRead) -> Result<Option<u64>> {
    let Some(raw) = console::prompt_line(input, "Contact id")? else {
        return Ok(None);
    };
    match raw.trim().parse() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            println!("{}", "Id must be a number.".yellow());
            Ok(None)
        }
    }
}

/// Render a command outcome, treating a missing id as a reportable message
/// rather than a failure of the whole session.
fn report(outcome: Result<cardfile::commands::CmdResult>) -> Result<()> {
    match outcome {
        Ok(result) => {
            console::print_messages(&result.messages);
            Ok(())
        }
        Err(CardfileError::ContactNotFound(id)) => {
            println!("{}", format!("Contact not found: #{}", id).yellow());
            Ok(())
        }
        Err(e) => Err(e),
    }
}

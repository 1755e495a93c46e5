use super::{LoadOutcome, SkippedLine, Storage};
use crate::error::{CardfileError, Result};
use crate::model::Contact;
use std::fs;
use std::path::{Path, PathBuf};

/// Field separator in the persisted file. Not escapable.
pub const DELIMITER: char = '|';

/// File-backed contact storage: one contact per line, fields joined by
/// [`DELIMITER`] in `id|name|phone|email` order.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(CardfileError::Io)?;
            }
        }
        Ok(())
    }
}

/// Decode one stored line. Missing trailing fields come back as empty
/// strings; anything past the fourth field is dropped.
fn parse_line(line: &str) -> std::result::Result<Contact, String> {
    let mut fields = line.split(DELIMITER);

    let id_field = fields.next().unwrap_or("");
    let id = id_field
        .trim()
        .parse()
        .map_err(|_| format!("id field {:?} is not an integer", id_field))?;

    let name = fields.next().unwrap_or("").to_string();
    let phone = fields.next().unwrap_or("").to_string();
    let email = fields.next().unwrap_or("").to_string();

    Ok(Contact::new(id, name, phone, email))
}

fn serialize_line(contact: &Contact) -> String {
    format!(
        "{}{d}{}{d}{}{d}{}",
        contact.id,
        contact.name,
        contact.phone,
        contact.email,
        d = DELIMITER
    )
}

impl Storage for FileStore {
    fn load(&self) -> Result<LoadOutcome> {
        if !self.path.exists() {
            return Ok(LoadOutcome::default());
        }

        let content = fs::read_to_string(&self.path).map_err(CardfileError::Io)?;
        let mut outcome = LoadOutcome::default();

        for (idx, line) in content.lines().enumerate() {
            match parse_line(line) {
                Ok(contact) => outcome.contacts.push(contact),
                Err(detail) => outcome.skipped.push(SkippedLine {
                    number: idx + 1,
                    detail,
                }),
            }
        }

        Ok(outcome)
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        self.ensure_parent_dir()?;

        let mut data = String::new();
        for contact in contacts {
            data.push_str(&serialize_line(contact));
            data.push('\n');
        }

        // Write to a sibling temp file and rename into place so an
        // interrupted save never leaves the store truncated.
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, data).map_err(CardfileError::Io)?;
        fs::rename(&tmp_path, &self.path).map_err(CardfileError::Io)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().join("contacts.txt"))
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let outcome = store.load().unwrap();
        assert!(outcome.contacts.is_empty());
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn save_then_load_round_trips_in_order() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        let contacts = vec![
            Contact::new(1, "Ann".into(), "555-1111".into(), "ann@x.com".into()),
            Contact::new(2, "Bob".into(), "555-2222".into(), "bob@x.com".into()),
            Contact::new(5, "".into(), "".into(), "".into()),
        ];
        store.save(&contacts).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.contacts, contacts);
        assert!(loaded.skipped.is_empty());
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store
            .save(&[Contact::new(1, "Ann".into(), "".into(), "".into())])
            .unwrap();

        for entry in fs::read_dir(dir.path()).unwrap() {
            let name = entry.unwrap().file_name();
            assert_ne!(name.to_str().unwrap(), "contacts.tmp");
        }
    }

    #[test]
    fn missing_trailing_fields_load_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts.txt");
        fs::write(&path, "3|Ann\n").unwrap();

        let outcome = FileStore::new(&path).load().unwrap();
        assert_eq!(
            outcome.contacts,
            vec![Contact::new(3, "Ann".into(), "".into(), "".into())]
        );
    }

    #[test]
    fn extra_fields_are_dropped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts.txt");
        fs::write(&path, "3|Ann|555|ann@x.com|leftover\n").unwrap();

        let outcome = FileStore::new(&path).load().unwrap();
        assert_eq!(outcome.contacts[0].email, "ann@x.com");
    }

    #[test]
    fn bad_id_line_is_skipped_and_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts.txt");
        fs::write(&path, "1|Ann|555|ann@x.com\nnot-a-number|Bob||\n2|Cid||\n").unwrap();

        let outcome = FileStore::new(&path).load().unwrap();
        assert_eq!(outcome.contacts.len(), 2);
        assert_eq!(outcome.contacts[1].name, "Cid");
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].number, 2);
        assert!(outcome.skipped[0].detail.contains("not an integer"));
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deep").join("contacts.txt");
        let mut store = FileStore::new(&path);

        store
            .save(&[Contact::new(1, "Ann".into(), "".into(), "".into())])
            .unwrap();
        assert!(path.exists());
    }
}

use crate::commands::CmdResult;
use crate::error::{CardfileError, Result};
use crate::model::Contact;
use std::str::FromStr;

/// Optional ordering for `list`. The default is no sorting at all: contacts
/// come back in insertion order, exactly as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Name,
    Phone,
    Email,
}

impl FromStr for SortKey {
    type Err = CardfileError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "id" => Ok(SortKey::Id),
            "name" => Ok(SortKey::Name),
            "phone" => Ok(SortKey::Phone),
            "email" => Ok(SortKey::Email),
            other => Err(CardfileError::Input(format!(
                "Unknown sort key: '{}' (expected id, name, phone or email)",
                other
            ))),
        }
    }
}

pub fn run(contacts: &[Contact], sort: Option<SortKey>) -> Result<CmdResult> {
    let mut listed: Vec<Contact> = contacts.to_vec();

    if let Some(key) = sort {
        match key {
            SortKey::Id => listed.sort_by_key(|c| c.id),
            SortKey::Name => listed.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::Phone => listed.sort_by(|a, b| a.phone.cmp(&b.phone)),
            SortKey::Email => listed.sort_by(|a, b| a.email.cmp(&b.email)),
        }
    }

    Ok(CmdResult::default().with_listed(listed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contacts() -> Vec<Contact> {
        vec![
            Contact::new(2, "Zoe".into(), "111".into(), "z@x.com".into()),
            Contact::new(1, "Ann".into(), "333".into(), "a@x.com".into()),
            Contact::new(3, "Bob".into(), "222".into(), "b@x.com".into()),
        ]
    }

    #[test]
    fn default_is_insertion_order() {
        let result = run(&contacts(), None).unwrap();
        let names: Vec<_> = result.listed.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Zoe", "Ann", "Bob"]);
    }

    #[test]
    fn empty_collection_lists_as_empty() {
        let result = run(&[], None).unwrap();
        assert!(result.listed.is_empty());
    }

    #[test]
    fn sorts_by_requested_key() {
        let by_name = run(&contacts(), Some(SortKey::Name)).unwrap();
        let names: Vec<_> = by_name.listed.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Ann", "Bob", "Zoe"]);

        let by_id = run(&contacts(), Some(SortKey::Id)).unwrap();
        assert_eq!(by_id.listed[0].id, 1);

        let by_phone = run(&contacts(), Some(SortKey::Phone)).unwrap();
        assert_eq!(by_phone.listed[0].phone, "111");
    }

    #[test]
    fn sort_key_parses_case_insensitively() {
        assert_eq!("Name".parse::<SortKey>().unwrap(), SortKey::Name);
        assert_eq!(" email ".parse::<SortKey>().unwrap(), SortKey::Email);
        assert!("nope".parse::<SortKey>().is_err());
    }
}

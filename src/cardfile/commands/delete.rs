use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CardfileError, Result};
use crate::model::{Contact, ContactId};

use super::helpers::find_index;

pub fn run(contacts: &mut Vec<Contact>, id: ContactId) -> Result<CmdResult> {
    let index = find_index(contacts, id).ok_or(CardfileError::ContactNotFound(id))?;
    let removed = contacts.remove(index);

    let mut result = CmdResult::default().with_affected(vec![removed.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Contact deleted (#{}): {}",
        removed.id, removed.name
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contacts() -> Vec<Contact> {
        vec![
            Contact::new(1, "Ann".into(), "".into(), "".into()),
            Contact::new(2, "Bob".into(), "".into(), "".into()),
            Contact::new(3, "Cid".into(), "".into(), "".into()),
        ]
    }

    #[test]
    fn removes_exactly_the_matching_contact() {
        let mut contacts = contacts();
        run(&mut contacts, 2).unwrap();

        let ids: Vec<_> = contacts.iter().map(|c| c.id).collect();
        assert_eq!(ids, [1, 3]);
    }

    #[test]
    fn unknown_id_is_not_found_and_removes_nothing() {
        let mut contacts = contacts();
        let before = contacts.clone();

        let err = run(&mut contacts, 42).unwrap_err();
        assert!(matches!(err, CardfileError::ContactNotFound(42)));
        assert_eq!(contacts, before);
    }

    #[test]
    fn reports_the_removed_contact() {
        let mut contacts = contacts();
        let result = run(&mut contacts, 3).unwrap();
        assert_eq!(result.affected[0].name, "Cid");
    }
}

use crate::commands::{CmdMessage, CmdResult, ContactUpdate};
use crate::error::{CardfileError, Result};
use crate::model::{Contact, ContactId};

use super::helpers::find_index;

pub fn run(contacts: &mut [Contact], id: ContactId, update: &ContactUpdate) -> Result<CmdResult> {
    let index = find_index(contacts, id).ok_or(CardfileError::ContactNotFound(id))?;
    let contact = &mut contacts[index];

    if let Some(name) = &update.name {
        contact.name = name.clone();
    }
    if let Some(phone) = &update.phone {
        contact.phone = phone.clone();
    }
    if let Some(email) = &update.email {
        contact.email = email.clone();
    }

    let mut result = CmdResult::default().with_affected(vec![contact.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Contact updated (#{}): {}",
        id, contact.name
    )));
    Ok(result)
}

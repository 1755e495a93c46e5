use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Contact;

use super::helpers::next_id;

pub fn run(
    contacts: &mut Vec<Contact>,
    name: String,
    phone: String,
    email: String,
) -> Result<CmdResult> {
    let contact = Contact::new(next_id(contacts), name, phone, email);
    contacts.push(contact.clone());

    let mut result = CmdResult::default().with_affected(vec![contact.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Contact added (#{}): {}",
        contact.id, contact.name
    )));
    Ok(result)
}

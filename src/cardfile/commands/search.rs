use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Contact;

/// Case-sensitive substring match over name, phone and email, in collection
/// order. The empty term matches every contact (the empty string is a
/// substring of everything); that is the expected behavior, not a special
/// case.
pub fn run(contacts: &[Contact], term: &str) -> Result<CmdResult> {
    let listed: Vec<Contact> = contacts
        .iter()
        .filter(|c| c.name.contains(term) || c.phone.contains(term) || c.email.contains(term))
        .cloned()
        .collect();

    Ok(CmdResult::default().with_listed(listed))
}

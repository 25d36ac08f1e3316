use super::helpers::{self, DocSelector};
use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, selectors: &[DocSelector]) -> Result<CmdResult> {
    // Resolve everything up front so an invalid selector aborts the whole
    // batch before anything is deleted.
    let resolved = helpers::resolve_selectors(store, selectors)?;

    for entry in &resolved {
        store.delete_document(&entry.document.metadata.id)?;
    }

    let mut result = CmdResult::default();
    let count = resolved.len();
    result = result.with_affected(resolved);
    result.add_message(CmdMessage::success(format!(
        "Removed {} document{}",
        count,
        if count == 1 { "" } else { "s" }
    )));
    Ok(result)
}

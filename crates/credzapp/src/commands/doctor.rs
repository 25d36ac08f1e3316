use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let report = store.doctor()?;

    let mut result = CmdResult::default();
    if report.is_clean() {
        result.add_message(CmdMessage::info("No inconsistencies found."));
    } else {
        if report.removed_orphan_payloads > 0 {
            result.add_message(CmdMessage::warning(format!(
                "Removed {} orphaned payload file(s)",
                report.removed_orphan_payloads
            )));
        }
        if report.removed_zombie_entries > 0 {
            result.add_message(CmdMessage::warning(format!(
                "Dropped {} index entr(ies) with missing payloads",
                report.removed_zombie_entries
            )));
        }
    }
    Ok(result)
}

use super::helpers::{self, DocSelector};
use super::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, selectors: &[DocSelector]) -> Result<CmdResult> {
    let resolved = helpers::resolve_selectors(store, selectors)?;
    Ok(CmdResult::default().with_listed(resolved))
}

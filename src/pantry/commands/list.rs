use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::InventoryStore;

/// Full reload of the collection. There is no delta fetch.
pub fn run<S: InventoryStore>(store: &S) -> Result<CmdResult> {
    let items = store.fetch_all()?;
    Ok(CmdResult::default().with_listed_items(items))
}

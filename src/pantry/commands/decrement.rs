use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Document;
use crate::store::InventoryStore;

/// Removes one unit of `name`. The last unit deletes the document.
/// An absent name is a no-op.
pub fn run<S: InventoryStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let existing = match store.read_one(name)? {
        Some(doc) => doc,
        None => {
            result.add_message(CmdMessage::info(format!("No item named {}", name)));
            return Ok(result);
        }
    };

    if existing.quantity <= 1 {
        store.delete_one(name)?;
        result.add_message(CmdMessage::success(format!("Item removed: {}", name)));
        let gone = Document {
            quantity: 0,
            ..existing
        };
        result.affected_items.push(gone.into_item(name));
    } else {
        let doc = Document {
            quantity: existing.quantity - 1,
            category: existing.category,
        };
        store.write_one(name, &doc)?;
        result.add_message(CmdMessage::success(format!(
            "Item updated: {} x{}",
            name, doc.quantity
        )));
        result.affected_items.push(doc.into_item(name));
    }

    Ok(result)
}

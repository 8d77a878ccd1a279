use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{validate_name, Category, Document};
use crate::store::InventoryStore;

/// Adds one unit of `name`.
///
/// A new item is created with quantity 1 and `category_if_new`, or
/// `default_category` when none is given. An existing item keeps its stored
/// category; `category_if_new` is not parsed for it.
pub fn run<S: InventoryStore>(
    store: &mut S,
    name: &str,
    category_if_new: Option<&str>,
    default_category: Category,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let doc = match store.read_one(name)? {
        Some(existing) => {
            if let Some(requested) = category_if_new {
                let same = requested
                    .parse::<Category>()
                    .map(|c| c.as_str().eq_ignore_ascii_case(&existing.category))
                    .unwrap_or(false);
                if !same {
                    result.add_message(CmdMessage::warning(format!(
                        "{} already exists as {}; category unchanged",
                        name, existing.category
                    )));
                }
            }
            Document {
                quantity: existing.quantity.saturating_add(1),
                category: existing.category,
            }
        }
        None => {
            validate_name(name)?;
            let category = match category_if_new {
                Some(raw) => Category::parse_selectable(raw)?,
                None => default_category,
            };
            Document::new(category, 1)
        }
    };
    store.write_one(name, &doc)?;

    if doc.quantity == 1 {
        result.add_message(CmdMessage::success(format!(
            "Item added: {} ({})",
            name, doc.category
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Item updated: {} x{}",
            name, doc.quantity
        )));
    }
    result.affected_items.push(doc.into_item(name));
    Ok(result)
}

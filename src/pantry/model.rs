use crate::error::PantryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed classification tag of an item, set once when the item is first created.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fruit,
    Vegetable,
    Grain,
    Dairy,
    // Older collections carry the misspelled tag.
    #[serde(alias = "protien")]
    Protein,
    Snacks,
    /// Used for items created without an explicit category.
    #[default]
    Uncategorized,
}

impl Category {
    /// Categories a user can pick for a new item, in display order.
    pub const SELECTABLE: [Category; 6] = [
        Category::Fruit,
        Category::Vegetable,
        Category::Grain,
        Category::Dairy,
        Category::Protein,
        Category::Snacks,
    ];

    /// Every category, `Uncategorized` last.
    pub const ALL: [Category; 7] = [
        Category::Fruit,
        Category::Vegetable,
        Category::Grain,
        Category::Dairy,
        Category::Protein,
        Category::Snacks,
        Category::Uncategorized,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fruit => "fruit",
            Category::Vegetable => "vegetable",
            Category::Grain => "grain",
            Category::Dairy => "dairy",
            Category::Protein => "protein",
            Category::Snacks => "snacks",
            Category::Uncategorized => "uncategorized",
        }
    }

    /// Parses a category picked for a new item. `uncategorized` is only ever a
    /// default, so it is rejected here.
    pub fn parse_selectable(s: &str) -> crate::error::Result<Self> {
        match s.parse::<Category>()? {
            Category::Uncategorized => Err(PantryError::InvalidCategory(s.to_string())),
            category => Ok(category),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = PantryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fruit" => Ok(Category::Fruit),
            "vegetable" => Ok(Category::Vegetable),
            "grain" => Ok(Category::Grain),
            "dairy" => Ok(Category::Dairy),
            "protein" | "protien" => Ok(Category::Protein),
            "snacks" => Ok(Category::Snacks),
            "uncategorized" => Ok(Category::Uncategorized),
            _ => Err(PantryError::InvalidCategory(s.to_string())),
        }
    }
}

/// The stored form of an item: the document body under its name key.
///
/// `category` is kept as the raw stored string so that quantity updates write
/// back exactly what was there, even for tags this version does not know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub category: String,
    pub quantity: u32,
}

impl Document {
    pub fn new(category: Category, quantity: u32) -> Self {
        Self {
            category: category.to_string(),
            quantity,
        }
    }

    /// Parsed category, falling back to `Uncategorized` for unknown tags.
    pub fn category(&self) -> Category {
        self.category.parse().unwrap_or_else(|_| {
            tracing::warn!(category = %self.category, "unknown stored category");
            Category::Uncategorized
        })
    }

    pub fn into_item(self, name: impl Into<String>) -> InventoryItem {
        InventoryItem {
            name: name.into(),
            category: self.category(),
            quantity: self.quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    pub category: Category,
    pub quantity: u32,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, category: Category, quantity: u32) -> Self {
        Self {
            name: name.into(),
            category,
            quantity,
        }
    }

    /// Name with its first letter capitalised, as lists show it.
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Checks that `name` can serve as a document key. The name is used verbatim.
pub fn validate_name(name: &str) -> crate::error::Result<()> {
    if name.is_empty() {
        return Err(PantryError::InvalidName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_categories_case_insensitively() {
        assert_eq!("Dairy".parse::<Category>().unwrap(), Category::Dairy);
        assert_eq!(" snacks ".parse::<Category>().unwrap(), Category::Snacks);
    }

    #[test]
    fn accepts_legacy_protein_spelling() {
        assert_eq!("protien".parse::<Category>().unwrap(), Category::Protein);
        let doc: Document = serde_json::from_str(r#"{"category":"protien","quantity":2}"#).unwrap();
        assert_eq!(doc.category(), Category::Protein);
    }

    #[test]
    fn rejects_unknown_category() {
        let err = "candy".parse::<Category>().unwrap_err();
        assert!(matches!(err, PantryError::InvalidCategory(ref c) if c == "candy"));
    }

    #[test]
    fn unknown_stored_category_reads_as_uncategorized() {
        let doc = Document {
            category: "apple".to_string(),
            quantity: 1,
        };
        let item = doc.into_item("apple");
        assert_eq!(item.category, Category::Uncategorized);
    }

    #[test]
    fn display_name_capitalises_first_letter() {
        let item = InventoryItem::new("egg", Category::Dairy, 1);
        assert_eq!(item.display_name(), "Egg");
    }

    #[test]
    fn only_empty_names_are_invalid() {
        assert!(validate_name("").is_err());
        assert!(validate_name(" egg").is_ok());
    }

    #[test]
    fn uncategorized_is_not_selectable() {
        assert!(Category::parse_selectable("uncategorized").is_err());
        assert_eq!(Category::parse_selectable("Fruit").unwrap(), Category::Fruit);
        assert_eq!("uncategorized".parse::<Category>().unwrap(), Category::Uncategorized);
    }

    #[test]
    fn document_serializes_with_lowercase_category() {
        let json = serde_json::to_string(&Document::new(Category::Grain, 3)).unwrap();
        assert_eq!(json, r#"{"category":"grain","quantity":3}"#);
    }
}

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::rarity::Rarity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseId(pub u32);

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cosmetic reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub glyph: String,
    pub rarity: Rarity,
}

/// A priced bundle of possible rewards. The item pool is never empty once a case has made
/// it into a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Case {
    id: CaseId,
    name: String,
    glyph: String,
    price: u32,
    items: Vec<Arc<Item>>,
}

impl Case {
    pub fn id(&self) -> CaseId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Informational only, nothing is ever deducted.
    pub fn price(&self) -> u32 {
        self.price
    }

    pub fn items(&self) -> &[Arc<Item>] {
        &self.items
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.items.iter().any(|candidate| candidate.as_ref() == item)
    }

    /// The sequence scrolled past during the roulette animation: the pool, twice.
    pub fn roulette_strip(&self) -> impl Iterator<Item = &Arc<Item>> + '_ {
        self.items.iter().chain(self.items.iter())
    }

    #[cfg(test)]
    pub(crate) fn unchecked(id: u32, items: Vec<Arc<Item>>) -> Self {
        Self {
            id: CaseId(id),
            name: format!("Case {}", id),
            glyph: "📦".to_string(),
            price: 1,
            items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseDefinition {
    pub id: CaseId,
    pub name: String,
    pub glyph: String,
    pub price: u32,
    pub items: Vec<ItemId>,
}

/// Raw catalog data as written by hand or loaded from JSON. Turned into a [`Catalog`] by
/// [`Catalog::from_definition`], which checks every reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDefinition {
    pub items: Vec<Item>,
    pub cases: Vec<CaseDefinition>,
}

impl CatalogDefinition {
    pub fn builtin() -> Self {
        let weapon = |id: u32, name: &str, glyph: &str, rarity: Rarity| Item {
            id: ItemId(id),
            name: name.to_string(),
            glyph: glyph.to_string(),
            rarity,
        };
        let case = |id: u32, name: &str, glyph: &str, price: u32, items: [u32; 3]| CaseDefinition {
            id: CaseId(id),
            name: name.to_string(),
            glyph: glyph.to_string(),
            price,
            items: items.into_iter().map(ItemId).collect(),
        };

        Self {
            items: vec![
                weapon(1, "Classic Knife", "🔪", Rarity::Common),
                weapon(2, "Blue Steel", "🗡️", Rarity::Rare),
                weapon(3, "Golden Blade", "⚔️", Rarity::Legendary),
                weapon(4, "Silver Dagger", "🔪", Rarity::Common),
                weapon(5, "Ruby Edge", "🗡️", Rarity::Rare),
                weapon(6, "Diamond Sword", "⚔️", Rarity::Legendary),
            ],
            cases: vec![
                case(1, "Starter Case", "📦", 100, [1, 2, 3]),
                case(2, "Premium Case", "🎁", 250, [3, 4, 5]),
                case(3, "Legendary Case", "💎", 500, [4, 5, 6]),
            ],
        }
    }
}

/// Immutable, validated set of items and the cases that draw from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<Arc<Item>>,
    cases: Vec<Arc<Case>>,
}

impl Catalog {
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_definition(CatalogDefinition::builtin())
    }

    pub fn from_definition(definition: CatalogDefinition) -> Result<Self, CatalogError> {
        let mut by_id: HashMap<ItemId, Arc<Item>> = HashMap::new();
        let mut items = Vec::with_capacity(definition.items.len());
        for item in definition.items {
            let id = item.id;
            let item = Arc::new(item);
            if by_id.insert(id, item.clone()).is_some() {
                return Err(CatalogError::DuplicateItem(id));
            }
            items.push(item);
        }

        let mut cases: Vec<Arc<Case>> = Vec::with_capacity(definition.cases.len());
        for case in definition.cases {
            if cases.iter().any(|existing| existing.id == case.id) {
                return Err(CatalogError::DuplicateCase(case.id));
            }
            if case.items.is_empty() {
                return Err(CatalogError::EmptyCase(case.id));
            }
            if case.price == 0 {
                return Err(CatalogError::ZeroPrice(case.id));
            }

            let pool = case
                .items
                .iter()
                .map(|item_id| {
                    by_id.get(item_id).cloned().ok_or(CatalogError::UnknownItem {
                        case: case.id,
                        item: *item_id,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            cases.push(Arc::new(Case {
                id: case.id,
                name: case.name,
                glyph: case.glyph,
                price: case.price,
                items: pool,
            }));
        }

        log::debug!("Catalog loaded with {} items and {} cases", items.len(), cases.len());
        Ok(Self { items, cases })
    }

    pub fn list_cases(&self) -> &[Arc<Case>] {
        &self.cases
    }

    pub fn case(&self, id: CaseId) -> Option<&Arc<Case>> {
        self.cases.iter().find(|case| case.id == id)
    }

    pub fn items(&self) -> &[Arc<Item>] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&Arc<Item>> {
        self.items.iter().find(|item| item.id == id)
    }
}

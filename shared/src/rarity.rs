use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Cosmetic classification of an item.
///
/// Rarity never influences which item is drawn from a case; the drop chances below are
/// only shown on the rules panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
}

impl Rarity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Rare => "Rare",
            Self::Legendary => "Legendary",
        }
    }

    /// Ordering key, higher is rarer.
    pub fn tier(&self) -> u8 {
        match self {
            Self::Common => 1,
            Self::Rare => 2,
            Self::Legendary => 3,
        }
    }

    /// Drop chance advertised on the rules panel, in percent.
    pub fn displayed_drop_chance(&self) -> u8 {
        match self {
            Self::Common => 60,
            Self::Rare => 30,
            Self::Legendary => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_displayed_chances_sum_to_hundred() {
        let total: u32 = Rarity::iter().map(|r| r.displayed_drop_chance() as u32).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_label_matches_display() {
        for rarity in Rarity::iter() {
            assert_eq!(rarity.label(), rarity.to_string());
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Rarity::Legendary).unwrap();
        assert_eq!(json, "\"legendary\"");
        let back: Rarity = serde_json::from_str("\"rare\"").unwrap();
        assert_eq!(back, Rarity::Rare);
    }
}

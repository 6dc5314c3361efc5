use std::fmt::Write;
use std::sync::Arc;

use shared::constants::{
    DISPLAY_BALANCE, EMPTY_INVENTORY_MESSAGE, GAME_TITLE, HERO_TAGLINE, HOW_TO_PLAY,
    OPENING_MESSAGE, PLAYER_NAME, WIN_MESSAGE,
};
use shared::{Case, Item, Rarity};
use strum::IntoEnumIterator;

fn glyphs<'a>(items: impl Iterator<Item = &'a Arc<Item>>) -> String {
    items.map(|item| item.glyph.as_str()).collect::<Vec<_>>().join(" ")
}

pub fn banner() -> String {
    format!("🎮 {}\n{}\nType `help` for commands.", GAME_TITLE, HERO_TAGLINE)
}

pub fn cases(cases: &[Arc<Case>]) -> String {
    let mut out = String::from("Cases:");
    for case in cases {
        let _ = write!(
            out,
            "\n  [{}] {} {} - {} coins   {}",
            case.id(),
            case.glyph(),
            case.name(),
            case.price(),
            glyphs(case.items().iter())
        );
    }
    out
}

pub fn opening(case: &Case) -> String {
    format!(
        "{} {}\n{}\n| {} |",
        case.glyph(),
        case.name(),
        OPENING_MESSAGE,
        glyphs(case.roulette_strip())
    )
}

pub fn item_line(item: &Item) -> String {
    format!("{} {} [{}]", item.glyph, item.name, item.rarity.label())
}

pub fn reveal(item: &Item) -> String {
    format!("{}\n  {}\nType `close` to continue.", WIN_MESSAGE, item_line(item))
}

pub fn inventory(items: &[Arc<Item>]) -> String {
    if items.is_empty() {
        return EMPTY_INVENTORY_MESSAGE.to_string();
    }

    let mut out = format!("My inventory ({} items):", items.len());
    for (n, item) in items.iter().enumerate() {
        let _ = write!(out, "\n  {:>3}. {}", n + 1, item_line(item));
    }
    out
}

pub fn profile(cases_opened: usize) -> String {
    format!(
        "👤 {}\n  Balance: {} 💰\n  Cases opened: {}",
        PLAYER_NAME, DISPLAY_BALANCE, cases_opened
    )
}

pub fn rules() -> String {
    let mut out = String::from("Rarity:");
    for rarity in Rarity::iter() {
        let _ = write!(out, "\n  {:<10} drop chance {}%", rarity.label(), rarity.displayed_drop_chance());
    }
    out.push_str("\nHow to play:");
    for (n, step) in HOW_TO_PLAY.iter().enumerate() {
        let _ = write!(out, "\n  {}. {}", n + 1, step);
    }
    out
}

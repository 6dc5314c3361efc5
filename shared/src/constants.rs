pub const GAME_TITLE: &str = "MM2 CASES";
pub const HERO_TAGLINE: &str = "Get legendary Murder Mystery 2 skins";

pub const PLAYER_NAME: &str = "Player #1337";
pub const DISPLAY_BALANCE: u32 = 1000;

pub const OPENING_MESSAGE: &str = "Opening case...";
pub const WIN_MESSAGE: &str = "🎉 You won! 🎉";
pub const EMPTY_INVENTORY_MESSAGE: &str = "Your inventory is empty. Open a case to get items!";
pub const OPENING_IN_PROGRESS_ERROR: &str = "A case is already being opened. Close it first.";

pub const HOW_TO_PLAY: [&str; 4] = [
    "Pick a case on the home page",
    "Press \"Open case\"",
    "Watch the roulette spin",
    "Collect your prize in the inventory!",
];

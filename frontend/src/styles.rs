use shared::Rarity;

pub const PAGE: &str = "min-h-screen bg-gradient-to-br from-roblox-dark via-gray-900 to-roblox-dark";
pub const MAIN: &str = "container mx-auto px-4 py-8";
pub const NAV: &str = "bg-roblox-dark/80 backdrop-blur-sm border-b border-roblox-red/20 sticky top-0 z-50";
pub const NAV_INNER: &str = "container mx-auto px-4";
pub const NAV_CONTENT: &str = "flex items-center justify-between h-16";
pub const NAV_BRAND: &str = "flex items-center gap-2 text-2xl font-bold text-white";
pub const NAV_ITEMS: &str = "flex gap-2";
pub const NAV_TAB: &str = "inline-flex items-center gap-2 px-4 py-2 rounded-md font-medium transition-colors duration-200";
pub const NAV_TAB_ACTIVE: &str = "bg-roblox-red text-white hover:bg-roblox-red/90";
pub const NAV_TAB_IDLE: &str = "text-gray-300 hover:text-white hover:bg-roblox-red/20";

pub const SECTION: &str = "space-y-6";
pub const GRID_CASES: &str = "grid grid-cols-1 md:grid-cols-3 gap-6";
pub const GRID_ITEMS: &str = "grid grid-cols-2 md:grid-cols-4 lg:grid-cols-6 gap-4";

pub const HERO: &str = "text-center py-12 space-y-4";
pub const HERO_TITLE: &str = "text-5xl font-bold text-white animate-float";
pub const HERO_SUBTITLE: &str = "text-xl text-gray-300";

pub const TEXT_H2: &str = "text-3xl font-bold text-white";
pub const TEXT_H3: &str = "text-2xl font-bold text-white text-center";
pub const TEXT_BODY: &str = "text-gray-300";
pub const TEXT_MUTED: &str = "text-center text-gray-400 text-lg";
pub const TEXT_PRICE: &str = "text-xl font-bold text-roblox-yellow";

pub const CARD: &str = "bg-gray-800/50 border-2 border-gray-700 rounded-lg overflow-hidden";
pub const CARD_CASE: &str = "bg-gray-800/50 border-2 border-gray-700 hover:border-roblox-red transition-all duration-300 rounded-lg overflow-hidden group";
pub const CARD_ERROR: &str = "bg-red-900/50 border border-red-800 rounded-lg p-4 text-red-200";

pub const BUTTON_OPEN: &str = "w-full bg-roblox-red hover:bg-roblox-red/90 text-white font-bold text-lg py-6 rounded-md group-hover:scale-105 transition-transform disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_CLOSE: &str = "bg-roblox-blue hover:bg-roblox-blue/90 text-white font-bold px-8 py-2 rounded-md";

pub const BADGE: &str = "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold text-white";
pub const BADGE_OUTLINE: &str = "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold text-white border border-roblox-blue";

// Roulette overlay
pub const OVERLAY: &str = "fixed inset-0 bg-black/90 backdrop-blur-sm z-50 flex items-center justify-center p-4";
pub const OVERLAY_INNER: &str = "w-full max-w-4xl space-y-6";
pub const ROULETTE_WINDOW: &str = "relative h-64 bg-gray-900 rounded-xl border-4 border-roblox-red overflow-hidden";
pub const ROULETTE_POINTER: &str = "absolute left-1/2 top-0 bottom-0 w-1 bg-roblox-red z-10";
pub const ROULETTE_STRIP: &str = "flex gap-4 items-center h-full px-8";
pub const ROULETTE_SPINNING: &str = "animate-spin-roulette";
pub const ROULETTE_TILE: &str = "flex-shrink-0 w-40 h-40 rounded-lg flex flex-col items-center justify-center gap-2 border-2";
pub const PRIZE: &str = "inline-block rounded-xl p-8 border-4 animate-glow-pulse";

pub fn rarity_background(rarity: Rarity) -> &'static str {
    match rarity {
        Rarity::Common => "bg-rarity-common",
        Rarity::Rare => "bg-rarity-rare",
        Rarity::Legendary => "bg-rarity-legendary",
    }
}

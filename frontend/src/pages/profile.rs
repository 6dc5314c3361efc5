use shared::constants::{DISPLAY_BALANCE, PLAYER_NAME};
use shared::Rarity;
use strum::IntoEnumIterator;
use yew::prelude::*;

use crate::components::RarityBadge;
use crate::hooks::use_case_opening;
use crate::styles;

#[function_component(Profile)]
pub fn profile() -> Html {
    let Some(opening) = use_case_opening() else {
        return html! {};
    };
    let inventory = opening.game.inventory();

    html! {
        <div class={styles::SECTION}>
            <h2 class={styles::TEXT_H2}>{ "Profile" }</h2>
            <div class={styles::CARD}>
                <div class="p-6 space-y-4">
                    <div class="flex items-center gap-4">
                        <span class="text-6xl">{ "👤" }</span>
                        <div>
                            <h3 class="text-2xl font-bold text-white">{ PLAYER_NAME }</h3>
                            <p class={styles::TEXT_BODY}>
                                { "Balance: " }
                                <span class={styles::TEXT_PRICE}>{ format!("🪙 {}", DISPLAY_BALANCE) }</span>
                            </p>
                        </div>
                    </div>
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                        <div class="text-center">
                            <p class="text-3xl font-bold text-white">{ inventory.count() }</p>
                            <p class={styles::TEXT_BODY}>{ "Cases opened" }</p>
                        </div>
                        { for Rarity::iter().map(|rarity| html! {
                            <div class="text-center space-y-1">
                                <p class="text-3xl font-bold text-white">{ inventory.count_by_rarity(rarity) }</p>
                                <RarityBadge {rarity} />
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </div>
    }
}

use shared::constants::HOW_TO_PLAY;
use shared::Rarity;
use strum::IntoEnumIterator;
use yew::prelude::*;

use crate::components::RarityBadge;
use crate::styles;

#[function_component(Rules)]
pub fn rules() -> Html {
    html! {
        <div class={styles::SECTION}>
            <h2 class={styles::TEXT_H2}>{ "Rules" }</h2>
            <div class={styles::CARD}>
                <div class="p-6 space-y-6">
                    <div class="space-y-3">
                        <h3 class="text-xl font-bold text-white">{ "Drop chances" }</h3>
                        { for Rarity::iter().map(|rarity| html! {
                            <div class="flex items-center justify-between">
                                <RarityBadge {rarity} />
                                <span class={styles::TEXT_BODY}>
                                    { format!("{}%", rarity.displayed_drop_chance()) }
                                </span>
                            </div>
                        }) }
                    </div>
                    <div class="space-y-3">
                        <h3 class="text-xl font-bold text-white">{ "How to play" }</h3>
                        <ol class="list-decimal list-inside space-y-1 text-gray-300">
                            { for HOW_TO_PLAY.iter().map(|step| html! { <li>{ *step }</li> }) }
                        </ol>
                    </div>
                </div>
            </div>
        </div>
    }
}

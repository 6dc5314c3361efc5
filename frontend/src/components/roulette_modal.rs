use shared::constants::{OPENING_MESSAGE, WIN_MESSAGE};
use shared::OpeningPhase;
use yew::prelude::*;

use crate::components::RarityBadge;
use crate::hooks::{use_case_opening, CaseOpeningAction};
use crate::styles;

/// Full-screen overlay shown while a case is selected. Purely a view of the opening state:
/// the strip spins while pending, the prize shows once revealed, and closing is only offered
/// after the reveal.
#[function_component(RouletteModal)]
pub fn roulette_modal() -> Html {
    let Some(opening) = use_case_opening() else {
        return html! {};
    };
    let Some(case) = opening.game.selected_case().cloned() else {
        return html! {};
    };

    let phase = opening.game.phase();
    let spinning = phase == OpeningPhase::Pending;

    let on_close = {
        let opening = opening.clone();
        Callback::from(move |_: MouseEvent| opening.dispatch(CaseOpeningAction::Close))
    };

    let prize = opening.game.revealed_item().cloned().map(|item| {
        html! {
            <div class="text-center space-y-4 animate-scale-in">
                <h4 class="text-2xl font-bold text-roblox-yellow">{ WIN_MESSAGE }</h4>
                <div class={classes!(styles::PRIZE, styles::rarity_background(item.rarity))}>
                    <div class="text-7xl mb-4">{ item.glyph.clone() }</div>
                    <h5 class="text-2xl font-bold text-white">{ item.name.clone() }</h5>
                    <div class="mt-2">
                        <RarityBadge rarity={item.rarity} />
                    </div>
                </div>
            </div>
        }
    });

    html! {
        <div class={styles::OVERLAY}>
            <div class={styles::OVERLAY_INNER}>
                <div class="text-center space-y-2">
                    <h3 class="text-3xl font-bold text-white">{ case.name().to_string() }</h3>
                    <p class={styles::TEXT_BODY}>{ OPENING_MESSAGE }</p>
                </div>

                <div class={styles::ROULETTE_WINDOW}>
                    <div class={styles::ROULETTE_POINTER}></div>
                    <div class={classes!(styles::ROULETTE_STRIP, spinning.then_some(styles::ROULETTE_SPINNING))}>
                        { for case.roulette_strip().enumerate().map(|(index, item)| html! {
                            <div key={index} class={classes!(styles::ROULETTE_TILE, styles::rarity_background(item.rarity))}>
                                <span class="text-5xl">{ item.glyph.clone() }</span>
                                <span class="text-white font-bold text-sm">{ item.name.clone() }</span>
                            </div>
                        }) }
                    </div>
                </div>

                { prize.unwrap_or_default() }

                if !spinning {
                    <div class="flex justify-center">
                        <button class={styles::BUTTON_CLOSE} onclick={on_close}>{ "Close" }</button>
                    </div>
                }
            </div>
        </div>
    }
}

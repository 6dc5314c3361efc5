use shared::constants::{GAME_TITLE, HERO_TAGLINE};
use shared::{CaseId, OpeningPhase};
use yew::prelude::*;

use crate::components::CaseCard;
use crate::hooks::{use_case_opening, CaseOpeningAction};
use crate::styles;

#[function_component(Home)]
pub fn home() -> Html {
    let Some(opening) = use_case_opening() else {
        return html! {};
    };

    let busy = opening.game.phase() != OpeningPhase::Idle;
    let on_open = {
        let opening = opening.clone();
        Callback::from(move |case_id: CaseId| opening.dispatch(CaseOpeningAction::Open(case_id)))
    };

    html! {
        <div class="space-y-8">
            <div class={styles::HERO}>
                <h1 class={styles::HERO_TITLE}>{ GAME_TITLE }</h1>
                <p class={styles::HERO_SUBTITLE}>{ HERO_TAGLINE }</p>
            </div>

            <div class={styles::GRID_CASES}>
                { for opening.game.list_cases().iter().map(|case| html! {
                    <CaseCard
                        key={case.id().0}
                        case={case.clone()}
                        on_open={on_open.clone()}
                        disabled={busy}
                    />
                }) }
            </div>
        </div>
    }
}

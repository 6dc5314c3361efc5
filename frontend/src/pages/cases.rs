use yew::prelude::*;

use crate::components::CaseCard;
use crate::hooks::use_case_opening;
use crate::styles;

/// Read-only listing; opening happens from the home page.
#[function_component(Cases)]
pub fn cases() -> Html {
    let Some(opening) = use_case_opening() else {
        return html! {};
    };

    html! {
        <div class={styles::SECTION}>
            <h2 class={styles::TEXT_H2}>{ "All cases" }</h2>
            <div class={styles::GRID_CASES}>
                { for opening.game.list_cases().iter().map(|case| html! {
                    <CaseCard key={case.id().0} case={case.clone()} />
                }) }
            </div>
        </div>
    }
}

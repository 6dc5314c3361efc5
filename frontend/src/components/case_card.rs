use std::sync::Arc;

use shared::{Case, CaseId};
use yew::prelude::*;

use crate::components::RarityBadge;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct CaseCardProps {
    pub case: Arc<Case>,
    /// Leave unset for a display-only card without the open button.
    #[prop_or_default]
    pub on_open: Option<Callback<CaseId>>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(CaseCard)]
pub fn case_card(props: &CaseCardProps) -> Html {
    let case = &props.case;

    let open_button = props.on_open.as_ref().map(|on_open| {
        let on_open = on_open.clone();
        let case_id = case.id();
        let onclick = Callback::from(move |_: MouseEvent| on_open.emit(case_id));
        html! {
            <button class={styles::BUTTON_OPEN} {onclick} disabled={props.disabled}>
                { "Open case" }
            </button>
        }
    });

    html! {
        <div class={styles::CARD_CASE}>
            <div class="p-6 space-y-4">
                <div class="text-6xl text-center animate-float">{ case.glyph().to_string() }</div>
                <h3 class={styles::TEXT_H3}>{ case.name().to_string() }</h3>
                <div class="flex items-center justify-center gap-2">
                    <span class="text-roblox-yellow">{ "🪙" }</span>
                    <span class={styles::TEXT_PRICE}>{ format!("{} coins", case.price()) }</span>
                </div>
                { open_button.unwrap_or_default() }
                <div class="flex flex-wrap gap-2 justify-center pt-2">
                    { for case.items().iter().enumerate().map(|(index, item)| html! {
                        <RarityBadge
                            key={index}
                            rarity={item.rarity}
                            text={Some(AttrValue::from(item.glyph.clone()))}
                        />
                    }) }
                </div>
            </div>
        </div>
    }
}

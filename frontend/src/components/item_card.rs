use std::sync::Arc;

use shared::{Item, Rarity};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct RarityBadgeProps {
    pub rarity: Rarity,
    #[prop_or_default]
    pub text: Option<AttrValue>,
}

/// Small coloured pill; shows the rarity label unless `text` is given.
#[function_component(RarityBadge)]
pub fn rarity_badge(props: &RarityBadgeProps) -> Html {
    let text = props
        .text
        .clone()
        .unwrap_or_else(|| AttrValue::Static(props.rarity.label()));

    html! {
        <span class={classes!(styles::BADGE, styles::rarity_background(props.rarity))}>
            { text.to_string() }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct ItemCardProps {
    pub item: Arc<Item>,
}

#[function_component(ItemCard)]
pub fn item_card(props: &ItemCardProps) -> Html {
    let item = &props.item;
    html! {
        <div class={classes!(
            styles::rarity_background(item.rarity),
            "bg-opacity-20",
            "border-2",
            "rounded-lg",
            "p-4",
            "text-center",
            "space-y-2"
        )}>
            <div class="text-4xl">{ item.glyph.clone() }</div>
            <p class="text-white font-bold text-sm">{ item.name.clone() }</p>
            <RarityBadge rarity={item.rarity} />
        </div>
    }
}

mod filters;

use shared::constants::EMPTY_INVENTORY_MESSAGE;
use yew::prelude::*;

use crate::components::ItemCard;
use crate::hooks::use_case_opening;
use crate::styles;
use filters::{visible_items, FilterBar, RarityFilter, SortCriteria};

#[function_component(Inventory)]
pub fn inventory() -> Html {
    let opening = use_case_opening();
    let rarity_filter = use_state(|| RarityFilter::All);
    let sort_criteria = use_state(|| SortCriteria::Default);
    let sort_ascending = use_state(|| true);

    let Some(opening) = opening else {
        return html! {};
    };
    let inventory = opening.game.inventory();

    let on_filter_change = {
        let rarity_filter = rarity_filter.clone();
        Callback::from(move |filter| rarity_filter.set(filter))
    };
    let on_sort_change = {
        let sort_criteria = sort_criteria.clone();
        Callback::from(move |criteria| sort_criteria.set(criteria))
    };
    let on_direction_change = {
        let sort_ascending = sort_ascending.clone();
        Callback::from(move |ascending| sort_ascending.set(ascending))
    };

    let content = if inventory.is_empty() {
        html! {
            <div class={styles::CARD}>
                <div class="p-12">
                    <p class={styles::TEXT_MUTED}>{ EMPTY_INVENTORY_MESSAGE }</p>
                </div>
            </div>
        }
    } else {
        let items = visible_items(
            inventory.list(),
            *rarity_filter,
            *sort_criteria,
            *sort_ascending,
        );
        html! {
            <div class={styles::GRID_ITEMS}>
                { for items.into_iter().enumerate().map(|(index, item)| html! {
                    <ItemCard key={index} {item} />
                }) }
            </div>
        }
    };

    html! {
        <div class={styles::SECTION}>
            <div class="flex items-center justify-between flex-wrap gap-4">
                <div class="flex items-center gap-3">
                    <h2 class={styles::TEXT_H2}>{ "My inventory" }</h2>
                    <span class={styles::BADGE_OUTLINE}>{ format!("{} items", inventory.count()) }</span>
                </div>
                if !inventory.is_empty() {
                    <FilterBar
                        rarity_filter={*rarity_filter}
                        sort_criteria={*sort_criteria}
                        sort_ascending={*sort_ascending}
                        {on_filter_change}
                        {on_sort_change}
                        {on_direction_change}
                    />
                }
            </div>
            { content }
        </div>
    }
}

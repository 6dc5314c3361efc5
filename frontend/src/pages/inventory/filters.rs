use std::cmp::Ordering;
use std::sync::Arc;

use shared::{Item, Rarity};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum RarityFilter {
    All,
    Only(Rarity),
}

impl RarityFilter {
    pub fn value(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(Rarity::Common) => "common",
            Self::Only(Rarity::Rare) => "rare",
            Self::Only(Rarity::Legendary) => "legendary",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(rarity) => rarity.label(),
        }
    }

    pub fn all_options() -> Vec<Self> {
        vec![
            Self::All,
            Self::Only(Rarity::Common),
            Self::Only(Rarity::Rare),
            Self::Only(Rarity::Legendary),
        ]
    }

    fn from_value(value: &str) -> Self {
        Self::all_options()
            .into_iter()
            .find(|filter| filter.value() == value)
            .unwrap_or(Self::All)
    }

    fn matches(&self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::Only(rarity) => item.rarity == *rarity,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SortCriteria {
    /// Order in which the items were won.
    Default,
    Rarity,
    Name,
}

impl SortCriteria {
    pub fn value(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Rarity => "rarity",
            Self::Name => "name",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Rarity => "Rarity",
            Self::Name => "Name",
        }
    }

    pub fn all_options() -> Vec<Self> {
        vec![Self::Default, Self::Rarity, Self::Name]
    }

    fn from_value(value: &str) -> Self {
        Self::all_options()
            .into_iter()
            .find(|criteria| criteria.value() == value)
            .unwrap_or(Self::Default)
    }
}

#[derive(Clone, PartialEq, Properties)]
pub struct FilterBarProps {
    pub rarity_filter: RarityFilter,
    pub sort_criteria: SortCriteria,
    pub sort_ascending: bool,
    pub on_filter_change: Callback<RarityFilter>,
    pub on_sort_change: Callback<SortCriteria>,
    pub on_direction_change: Callback<bool>,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let filter_onchange = {
        let on_filter_change = props.on_filter_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                on_filter_change.emit(RarityFilter::from_value(&select.value()));
            }
        })
    };

    let sort_onchange = {
        let on_sort_change = props.on_sort_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                on_sort_change.emit(SortCriteria::from_value(&select.value()));
            }
        })
    };

    let direction_onclick = {
        let on_direction_change = props.on_direction_change.clone();
        let current_direction = props.sort_ascending;
        Callback::from(move |_| on_direction_change.emit(!current_direction))
    };

    html! {
        <div class="flex space-x-4 items-center">
            <select class="bg-gray-800 text-white rounded-md p-2 text-sm" onchange={filter_onchange}>
                { for RarityFilter::all_options().into_iter().map(|filter| html! {
                    <option value={filter.value()} selected={props.rarity_filter == filter}>
                        { filter.label() }
                    </option>
                }) }
            </select>

            <select class="bg-gray-800 text-white rounded-md p-2 text-sm" onchange={sort_onchange}>
                { for SortCriteria::all_options().into_iter().map(|criteria| html! {
                    <option value={criteria.value()} selected={props.sort_criteria == criteria}>
                        { criteria.label() }
                    </option>
                }) }
            </select>

            <button
                onclick={direction_onclick}
                class="bg-gray-800 text-white rounded-md p-2 text-sm hover:bg-gray-700"
            >
                { if props.sort_ascending { "↑ Ascending" } else { "↓ Descending" } }
            </button>
        </div>
    }
}

/// Filters and orders a copy of the inventory for display. The inventory itself is never
/// reordered.
pub fn visible_items(
    items: &[Arc<Item>],
    filter: RarityFilter,
    criteria: SortCriteria,
    ascending: bool,
) -> Vec<Arc<Item>> {
    let mut visible: Vec<Arc<Item>> = items
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect();

    // stable sort keeps win order among equals
    visible.sort_by(|a, b| {
        let cmp = match criteria {
            SortCriteria::Default => Ordering::Equal,
            SortCriteria::Rarity => a.rarity.tier().cmp(&b.rarity.tier()),
            SortCriteria::Name => a.name.cmp(&b.name),
        };
        if ascending { cmp } else { cmp.reverse() }
    });
    if criteria == SortCriteria::Default && !ascending {
        visible.reverse();
    }
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Catalog;

    fn won(ids: &[u32]) -> Vec<Arc<Item>> {
        let catalog = Catalog::builtin().unwrap();
        ids.iter()
            .map(|id| catalog.item(shared::ItemId(*id)).unwrap().clone())
            .collect()
    }

    #[test]
    fn test_default_keeps_win_order() {
        let items = won(&[3, 1, 6, 1]);
        let visible = visible_items(&items, RarityFilter::All, SortCriteria::Default, true);
        assert_eq!(visible, items);
    }

    #[test]
    fn test_default_descending_is_newest_first() {
        let items = won(&[3, 1, 6]);
        let visible = visible_items(&items, RarityFilter::All, SortCriteria::Default, false);
        let ids: Vec<u32> = visible.iter().map(|item| item.id.0).collect();
        assert_eq!(ids, vec![6, 1, 3]);
    }

    #[test]
    fn test_filter_by_rarity() {
        let items = won(&[1, 2, 3, 4, 5, 6]);
        let filter = RarityFilter::Only(Rarity::Legendary);
        let visible = visible_items(&items, filter, SortCriteria::Default, true);
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|item| item.rarity == Rarity::Legendary));
    }

    #[test]
    fn test_sort_by_rarity_descending_puts_rarest_first() {
        let items = won(&[1, 6, 2, 4]);
        let visible = visible_items(&items, RarityFilter::All, SortCriteria::Rarity, false);
        let tiers: Vec<u8> = visible.iter().map(|item| item.rarity.tier()).collect();
        let mut sorted = tiers.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(tiers, sorted);
    }

    #[test]
    fn test_option_values_round_trip() {
        for filter in RarityFilter::all_options() {
            assert_eq!(RarityFilter::from_value(filter.value()), filter);
        }
        for criteria in SortCriteria::all_options() {
            assert_eq!(SortCriteria::from_value(criteria.value()), criteria);
        }
        assert_eq!(RarityFilter::from_value("mythical"), RarityFilter::All);
    }
}

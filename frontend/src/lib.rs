pub mod app;
pub mod components;
pub mod hooks;
pub mod pages;
pub mod styles;

pub use app::App;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::{cases::Cases, home::Home, inventory::Inventory, profile::Profile, rules::Rules};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/cases")]
    Cases,
    #[at("/inventory")]
    Inventory,
    #[at("/profile")]
    Profile,
    #[at("/rules")]
    Rules,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub const TABS: [(Route, &'static str, &'static str); 5] = [
        (Route::Home, "Home", "🏠"),
        (Route::Cases, "Cases", "📦"),
        (Route::Inventory, "Inventory", "🗄️"),
        (Route::Profile, "Profile", "👤"),
        (Route::Rules, "Rules", "📜"),
    ];
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::NotFound => html! { <Home /> },
        Route::Cases => html! { <Cases /> },
        Route::Inventory => html! { <Inventory /> },
        Route::Profile => html! { <Profile /> },
        Route::Rules => html! { <Rules /> },
    }
}

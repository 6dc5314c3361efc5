use shared::constants::GAME_TITLE;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{styles, Route};

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let current = use_route::<Route>().unwrap_or(Route::Home);

    html! {
        <nav class={styles::NAV}>
            <div class={styles::NAV_INNER}>
                <div class={styles::NAV_CONTENT}>
                    <Link<Route> to={Route::Home} classes={classes!(styles::NAV_BRAND)}>
                        <span class="text-3xl">{ "🎮" }</span>
                        <h1>{ GAME_TITLE }</h1>
                    </Link<Route>>
                    <div class={styles::NAV_ITEMS}>
                        { for Route::TABS.into_iter().map(|(route, label, icon)| {
                            let state = if route == current {
                                styles::NAV_TAB_ACTIVE
                            } else {
                                styles::NAV_TAB_IDLE
                            };
                            html! {
                                <Link<Route> to={route} classes={classes!(styles::NAV_TAB, state)}>
                                    <span>{ icon }</span>
                                    { label }
                                </Link<Route>>
                            }
                        }) }
                    </div>
                </div>
            </div>
        </nav>
    }
}

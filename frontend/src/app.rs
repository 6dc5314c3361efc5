use std::sync::Arc;

use shared::Catalog;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{NavBar, RouletteModal};
use crate::hooks::CaseOpeningProvider;
use crate::{styles, switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    let catalog = use_memo((), |_| Catalog::builtin().map(Arc::new));

    let catalog = match &*catalog {
        Ok(catalog) => catalog.clone(),
        Err(e) => {
            log::error!("Built-in catalog is invalid: {}", e);
            return html! {
                <div class={styles::PAGE}>
                    <main class={styles::MAIN}>
                        <div class={styles::CARD_ERROR}>{ format!("Could not load cases: {}", e) }</div>
                    </main>
                </div>
            };
        }
    };

    html! {
        <BrowserRouter>
            <CaseOpeningProvider {catalog}>
                <div class={styles::PAGE}>
                    <NavBar />
                    <main class={styles::MAIN}>
                        <Switch<Route> render={switch} />
                    </main>
                    <RouletteModal />
                </div>
            </CaseOpeningProvider>
        </BrowserRouter>
    }
}

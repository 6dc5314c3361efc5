use std::rc::Rc;
use std::sync::Arc;

use gloo_timers::callback::Timeout;
use shared::{CaseId, CaseOpening, Catalog, OpenTicket, OPEN_DURATION_MS};
use yew::prelude::*;

/// Everything the views render from. Only the reducer below changes it.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseOpeningState {
    pub game: CaseOpening,
}

impl CaseOpeningState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            game: CaseOpening::new(catalog),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CaseOpeningAction {
    Open(CaseId),
    Reveal(OpenTicket),
    Close,
}

impl Reducible for CaseOpeningState {
    type Action = CaseOpeningAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CaseOpeningAction::Open(case_id) => {
                if let Err(e) = next.game.open_case(case_id) {
                    log::error!("Could not open case: {}", e);
                    return self;
                }
            }
            CaseOpeningAction::Reveal(ticket) => {
                match next.game.reveal(ticket, &mut rand::thread_rng()) {
                    Ok(item) => log::info!("Won {} ({})", item.name, item.rarity),
                    Err(e) => {
                        log::warn!("Ignoring reveal {}: {}", ticket, e);
                        return self;
                    }
                }
            }
            CaseOpeningAction::Close => next.game.close_session(),
        }
        Rc::new(next)
    }
}

pub type CaseOpeningContext = UseReducerHandle<CaseOpeningState>;

#[derive(Properties, PartialEq)]
pub struct CaseOpeningProviderProps {
    pub catalog: Arc<Catalog>,
    pub children: Html,
}

/// Owns the game state and the reveal timer, and hands the state to every view below it.
///
/// The timer is keyed on the pending ticket: closing or replacing the opening changes the
/// key, which drops the old `Timeout` and cancels it.
#[function_component(CaseOpeningProvider)]
pub fn case_opening_provider(props: &CaseOpeningProviderProps) -> Html {
    let catalog = props.catalog.clone();
    let state = use_reducer(move || CaseOpeningState::new(catalog));

    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.game.pending_ticket(), move |pending| {
            let timeout = (*pending).map(|ticket| {
                Timeout::new(OPEN_DURATION_MS, move || {
                    dispatcher.dispatch(CaseOpeningAction::Reveal(ticket))
                })
            });
            move || drop(timeout)
        });
    }

    html! {
        <ContextProvider<CaseOpeningContext> context={state}>
            { props.children.clone() }
        </ContextProvider<CaseOpeningContext>>
    }
}

#[hook]
pub fn use_case_opening() -> Option<CaseOpeningContext> {
    use_context::<CaseOpeningContext>()
}

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use rand::rngs::StdRng;
use shared::{Case, CaseId, CaseOpening, Catalog, Item, OpenTicket, OpeningError, OpeningPhase};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

struct Engine {
    game: CaseOpening,
    rng: StdRng,
    timer: Option<JoinHandle<()>>,
}

struct Inner {
    engine: Mutex<Engine>,
    reveal_delay: Duration,
    phase_tx: watch::Sender<OpeningPhase>,
}

impl Inner {
    fn engine(&self) -> MutexGuard<'_, Engine> {
        self.engine.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn finish(&self, ticket: OpenTicket) {
        let mut engine = self.engine();
        let Engine { game, rng, timer } = &mut *engine;
        match game.reveal(ticket, rng) {
            Ok(item) => {
                *timer = None;
                info!("🎁 Opening {} revealed {} ({})", ticket, item.name, item.rarity);
                self.phase_tx.send_replace(OpeningPhase::Revealed);
            }
            Err(e) => warn!("Ignoring timer for opening {}: {}", ticket, e),
        }
    }
}

/// Drives a [`CaseOpening`] on the tokio runtime.
///
/// Opening a case spawns a timer task; the reveal happens when it fires. The task handle is
/// aborted whenever the session is closed or replaced.
#[derive(Clone)]
pub struct CaseOpener {
    inner: Arc<Inner>,
}

impl CaseOpener {
    pub fn new(catalog: Arc<Catalog>, reveal_delay: Duration, rng: StdRng) -> Self {
        let (phase_tx, _) = watch::channel(OpeningPhase::Idle);
        Self {
            inner: Arc::new(Inner {
                engine: Mutex::new(Engine {
                    game: CaseOpening::new(catalog),
                    rng,
                    timer: None,
                }),
                reveal_delay,
                phase_tx,
            }),
        }
    }

    pub fn list_cases(&self) -> Vec<Arc<Case>> {
        self.inner.engine().game.list_cases().to_vec()
    }

    /// Must be called from within a tokio runtime.
    pub fn open_case(&self, case_id: CaseId) -> Result<OpenTicket, OpeningError> {
        let mut engine = self.inner.engine();
        let ticket = engine.game.open_case(case_id)?;

        if let Some(previous) = engine.timer.take() {
            debug!("Cancelling timer of the replaced opening");
            previous.abort();
        }

        let weak: Weak<Inner> = Arc::downgrade(&self.inner);
        let delay = self.inner.reveal_delay;
        engine.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(inner) = weak.upgrade() {
                inner.finish(ticket);
            }
        }));

        info!("📦 Opening {} started for case {}", ticket, case_id);
        self.inner.phase_tx.send_replace(OpeningPhase::Pending);
        Ok(ticket)
    }

    pub fn close_session(&self) {
        let mut engine = self.inner.engine();
        if let Some(timer) = engine.timer.take() {
            debug!("Cancelling pending reveal");
            timer.abort();
        }
        engine.game.close_session();
        self.inner.phase_tx.send_replace(OpeningPhase::Idle);
    }

    pub fn phase(&self) -> OpeningPhase {
        self.inner.engine().game.phase()
    }

    pub fn selected_case(&self) -> Option<Arc<Case>> {
        self.inner.engine().game.selected_case().cloned()
    }

    pub fn revealed_item(&self) -> Option<Arc<Item>> {
        self.inner.engine().game.revealed_item().cloned()
    }

    pub fn inventory(&self) -> Vec<Arc<Item>> {
        self.inner.engine().game.inventory().list().to_vec()
    }

    /// Receives every phase change, starting from the current phase.
    pub fn subscribe(&self) -> watch::Receiver<OpeningPhase> {
        self.inner.phase_tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use shared::{CaseDefinition, CatalogDefinition, ItemId, Rarity};

    const DELAY: Duration = Duration::from_millis(3000);

    fn opener() -> CaseOpener {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        CaseOpener::new(catalog, DELAY, StdRng::seed_from_u64(5))
    }

    async fn advance(millis: u64) {
        tokio::time::sleep(Duration::from_millis(millis)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_reveal_waits_for_delay() {
        let opener = opener();
        opener.open_case(CaseId(1)).unwrap();
        assert_eq!(opener.phase(), OpeningPhase::Pending);
        assert!(opener.revealed_item().is_none());

        advance(2999).await;
        assert_eq!(opener.phase(), OpeningPhase::Pending);
        assert!(opener.revealed_item().is_none());
        assert!(opener.inventory().is_empty());

        advance(2).await;
        assert_eq!(opener.phase(), OpeningPhase::Revealed);
        let item = opener.revealed_item().unwrap();
        assert!(opener.selected_case().unwrap().contains(&item));
        assert_eq!(opener.inventory(), vec![item]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_cancels_pending_reveal() {
        let opener = opener();
        opener.open_case(CaseId(2)).unwrap();
        advance(1000).await;

        opener.close_session();
        assert_eq!(opener.phase(), OpeningPhase::Idle);

        advance(5000).await;
        assert_eq!(opener.phase(), OpeningPhase::Idle);
        assert!(opener.revealed_item().is_none());
        assert!(opener.inventory().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reopen_restarts_timer() {
        let opener = opener();
        opener.open_case(CaseId(1)).unwrap();
        advance(2000).await;
        opener.open_case(CaseId(3)).unwrap();

        advance(1500).await;
        assert_eq!(opener.phase(), OpeningPhase::Pending);
        assert!(opener.inventory().is_empty());

        advance(1600).await;
        assert_eq!(opener.phase(), OpeningPhase::Revealed);
        assert_eq!(opener.selected_case().unwrap().id(), CaseId(3));
        let inventory = opener.inventory();
        assert_eq!(inventory.len(), 1);
        assert!(opener.selected_case().unwrap().contains(&inventory[0]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_see_phase_changes() {
        let opener = opener();
        let mut rx = opener.subscribe();
        assert_eq!(*rx.borrow(), OpeningPhase::Idle);

        opener.open_case(CaseId(1)).unwrap();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), OpeningPhase::Pending);

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), OpeningPhase::Revealed);

        opener.close_session();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), OpeningPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_case_starts_nothing() {
        let opener = opener();
        assert_eq!(
            opener.open_case(CaseId(7)),
            Err(OpeningError::UnknownCase(CaseId(7)))
        );
        advance(4000).await;
        assert_eq!(opener.phase(), OpeningPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_case_session() {
        let item = |id: u32, name: &str| Item {
            id: ItemId(id),
            name: name.to_string(),
            glyph: "⚔️".to_string(),
            rarity: Rarity::Legendary,
        };
        let definition = CatalogDefinition {
            items: vec![item(1, "A"), item(2, "B"), item(3, "C")],
            cases: vec![CaseDefinition {
                id: CaseId(1),
                name: "Only Case".to_string(),
                glyph: "📦".to_string(),
                price: 100,
                items: vec![ItemId(1), ItemId(2), ItemId(3)],
            }],
        };
        let catalog = Arc::new(Catalog::from_definition(definition).unwrap());
        let opener = CaseOpener::new(catalog, DELAY, StdRng::seed_from_u64(11));

        opener.open_case(CaseId(1)).unwrap();
        assert_eq!(opener.phase(), OpeningPhase::Pending);

        advance(3001).await;
        assert_eq!(opener.phase(), OpeningPhase::Revealed);
        let revealed = opener.revealed_item().unwrap();
        assert!(["A", "B", "C"].contains(&revealed.name.as_str()));
        assert_eq!(opener.inventory(), vec![revealed]);

        opener.close_session();
        assert_eq!(opener.phase(), OpeningPhase::Idle);
        assert!(opener.revealed_item().is_none());
        assert_eq!(opener.inventory().len(), 1);
    }
}

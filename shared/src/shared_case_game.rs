use std::fmt;
use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::catalog::{Case, CaseId, Catalog, Item};
use crate::error::OpeningError;
use crate::inventory::SessionInventory;
use crate::reward;

/// Where the current case opening stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum OpeningPhase {
    Idle,
    Pending,
    Revealed,
}

/// Identifies one call to [`CaseOpening::open_case`]. A reveal has to present the ticket of
/// the opening that is still pending, so a timer that outlived its session is harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpenTicket(u64);

impl fmt::Display for OpenTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpeningSession {
    case: Arc<Case>,
    ticket: OpenTicket,
    revealed: Option<Arc<Item>>,
}

impl OpeningSession {
    pub fn case(&self) -> &Arc<Case> {
        &self.case
    }

    pub fn ticket(&self) -> OpenTicket {
        self.ticket
    }

    pub fn revealed(&self) -> Option<&Arc<Item>> {
        self.revealed.as_ref()
    }

    pub fn phase(&self) -> OpeningPhase {
        if self.revealed.is_some() {
            OpeningPhase::Revealed
        } else {
            OpeningPhase::Pending
        }
    }
}

/// The case game: catalog, the single opening in progress, and everything won so far.
///
/// This type owns every transition. It has no clock of its own; whoever drives it starts a
/// timer for [`OPEN_DURATION_MS`] after [`open_case`](Self::open_case) and calls
/// [`reveal`](Self::reveal) with the returned ticket when the timer fires.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseOpening {
    catalog: Arc<Catalog>,
    session: Option<OpeningSession>,
    inventory: SessionInventory,
    issued: u64,
}

impl CaseOpening {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            session: None,
            inventory: SessionInventory::new(),
            issued: 0,
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn list_cases(&self) -> &[Arc<Case>] {
        self.catalog.list_cases()
    }

    /// Starts opening a case. Any opening already in progress is replaced, and its ticket
    /// stops being accepted.
    pub fn open_case(&mut self, case_id: CaseId) -> Result<OpenTicket, OpeningError> {
        let case = self
            .catalog
            .case(case_id)
            .cloned()
            .ok_or(OpeningError::UnknownCase(case_id))?;

        if let Some(previous) = &self.session {
            log::warn!(
                "Opening {} of case {} replaced while {}",
                previous.ticket,
                previous.case.id(),
                previous.phase()
            );
        }

        self.issued += 1;
        let ticket = OpenTicket(self.issued);
        log::debug!("Opening {} started for case {}", ticket, case.name());
        self.session = Some(OpeningSession {
            case,
            ticket,
            revealed: None,
        });
        Ok(ticket)
    }

    /// Finishes the pending opening: draws the prize and adds it to the inventory.
    pub fn reveal<R: Rng + ?Sized>(
        &mut self,
        ticket: OpenTicket,
        rng: &mut R,
    ) -> Result<Arc<Item>, OpeningError> {
        let session = self.session.as_mut().ok_or(OpeningError::NotPending)?;
        if session.ticket != ticket {
            return Err(OpeningError::StaleTicket {
                expected: session.ticket,
                got: ticket,
            });
        }
        if session.revealed.is_some() {
            return Err(OpeningError::NotPending);
        }

        let item = reward::draw(&session.case, rng)?;
        session.revealed = Some(item.clone());
        self.inventory.append(item.clone());
        log::debug!("Opening {} revealed {} ({})", ticket, item.name, item.rarity);
        Ok(item)
    }

    /// Drops the current opening, pending or revealed. Won items stay in the inventory.
    pub fn close_session(&mut self) {
        match self.session.take() {
            Some(session) => log::debug!("Opening {} closed while {}", session.ticket, session.phase()),
            None => log::debug!("Close requested with no opening in progress"),
        }
    }

    pub fn phase(&self) -> OpeningPhase {
        self.session
            .as_ref()
            .map_or(OpeningPhase::Idle, OpeningSession::phase)
    }

    pub fn session(&self) -> Option<&OpeningSession> {
        self.session.as_ref()
    }

    pub fn selected_case(&self) -> Option<&Arc<Case>> {
        self.session.as_ref().map(OpeningSession::case)
    }

    pub fn revealed_item(&self) -> Option<&Arc<Item>> {
        self.session.as_ref().and_then(OpeningSession::revealed)
    }

    /// Ticket of the opening waiting on its timer, if any.
    pub fn pending_ticket(&self) -> Option<OpenTicket> {
        self.session
            .as_ref()
            .filter(|session| session.revealed.is_none())
            .map(OpeningSession::ticket)
    }

    pub fn inventory(&self) -> &SessionInventory {
        &self.inventory
    }
}

// Roulette timing
pub const OPEN_DURATION_MS: u32 = 3000; // Delay between opening a case and the reveal

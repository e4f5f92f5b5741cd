//! Per-view campaign list and the notifications a fetch produces.
//!
//! Each view owns one [`CampaignBoard`]. A fetch is bracketed by
//! [`CampaignBoard::begin_fetch`] and [`CampaignBoard::complete`]; the board
//! hands out increasing generations so a response that arrives after a newer
//! request has been issued is discarded instead of overwriting the list.

use serde::{Deserialize, Serialize};

use crate::category::CategorySelector;
use crate::discovery::CampaignSummary;
use crate::error::Error;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch campaigns";
pub const NO_CAMPAIGNS_MESSAGE: &str = "No campaigns found";
pub const LANDING_SUCCESS_MESSAGE: &str = "Campaigns fetched successfully!";

/// Which page a board backs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Landing page: loads every campaign once.
    Landing,
    /// Browse page: reloads on each category selection.
    Browse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Error,
}

/// A transient notification (toast) for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub view: View,
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    fn new(view: View, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            view,
            severity,
            message: message.into(),
        }
    }
}

/// Capability to show a transient notification.
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

/// Handle for one in-flight fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    selector: CategorySelector,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn selector(&self) -> &CategorySelector {
        &self.selector
    }
}

/// Result of settling a fetch against the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled {
    /// The list was replaced.
    Applied(Notice),
    /// The source failed; the list is untouched.
    Failed(Notice),
    /// A newer fetch was issued meanwhile; the response was dropped.
    Superseded,
}

impl Settled {
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Settled::Applied(notice) | Settled::Failed(notice) => Some(notice),
            Settled::Superseded => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CampaignBoard {
    view: View,
    campaigns: Vec<CampaignSummary>,
    selector: CategorySelector,
    issued: u64,
    /// Newest generation whose list is displayed.
    applied: u64,
    /// Newest generation that came back, successfully or not.
    settled: u64,
    loaded: bool,
}

impl CampaignBoard {
    pub fn new(view: View) -> Self {
        Self {
            view,
            campaigns: Vec::new(),
            selector: CategorySelector::All,
            issued: 0,
            applied: 0,
            settled: 0,
            loaded: false,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn campaigns(&self) -> &[CampaignSummary] {
        &self.campaigns
    }

    /// Selector of the list currently displayed.
    pub fn selector(&self) -> &CategorySelector {
        &self.selector
    }

    /// Whether a list has been applied at least once.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Whether the newest fetch has not come back yet.
    pub fn is_fetching(&self) -> bool {
        self.issued > self.settled
    }

    /// Clear the list and invalidate every in-flight fetch.
    pub fn reset(&mut self) {
        self.issued += 1;
        self.applied = self.issued;
        self.settled = self.issued;
        self.campaigns.clear();
        self.selector = CategorySelector::All;
        self.loaded = false;
    }

    pub fn begin_fetch(&mut self, selector: CategorySelector) -> FetchTicket {
        self.issued += 1;
        FetchTicket {
            generation: self.issued,
            selector,
        }
    }

    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<Vec<CampaignSummary>, Error>,
    ) -> Settled {
        self.settled = self.settled.max(ticket.generation);
        let campaigns = match outcome {
            Ok(campaigns) => campaigns,
            Err(e) => {
                log::error!(
                    "{:?} fetch #{} ({}) failed: {e}",
                    self.view,
                    ticket.generation,
                    ticket.selector
                );
                return Settled::Failed(Notice::new(self.view, Severity::Error, FETCH_FAILED_MESSAGE));
            }
        };

        if ticket.generation != self.issued {
            log::debug!(
                "{:?} fetch #{} superseded by #{}; dropping {} campaigns",
                self.view,
                ticket.generation,
                self.issued,
                campaigns.len()
            );
            return Settled::Superseded;
        }

        let notice = self.success_notice(&ticket.selector, campaigns.len());
        self.campaigns = campaigns;
        self.selector = ticket.selector;
        self.applied = ticket.generation;
        self.loaded = true;
        Settled::Applied(notice)
    }

    /// Settle a fetch and forward its notification, if any.
    pub fn settle(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<Vec<CampaignSummary>, Error>,
        notifier: &impl Notifier,
    ) -> Settled {
        let settled = self.complete(ticket, outcome);
        if let Some(notice) = settled.notice() {
            notifier.notify(notice);
        }
        settled
    }

    fn success_notice(&self, selector: &CategorySelector, count: usize) -> Notice {
        match self.view {
            View::Landing => Notice::new(self.view, Severity::Success, LANDING_SUCCESS_MESSAGE),
            View::Browse if count == 0 => {
                Notice::new(self.view, Severity::Info, NO_CAMPAIGNS_MESSAGE)
            }
            View::Browse => {
                let label = if selector.is_all() { "All" } else { selector.as_str() };
                Notice::new(
                    self.view,
                    Severity::Success,
                    format!("{label} campaigns fetched successfully!"),
                )
            }
        }
    }
}

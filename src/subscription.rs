use log::{debug, info, warn};
use thiserror::Error;

use crate::plans::{Plan, PlanId};
use crate::redirect::{RedirectError, Redirector};
use crate::session::SessionProvider;

pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to start subscription. Please try again.";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubscribeError {
    #[error("Please log in to subscribe")]
    NotLoggedIn,
    #[error(transparent)]
    Redirect(#[from] RedirectError),
}

impl SubscribeError {
    /// Text for the error banner. Never empty.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    ErrorShown,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanCardModel {
    pub plan: &'static Plan,
    pub selected: bool,
}

impl PlanCardModel {
    /// The selected card's button is disabled and just says so.
    pub fn button_label(&self) -> String {
        if self.selected {
            "Selected".to_string()
        } else {
            format!("Select {}", self.plan.title)
        }
    }
}

/// Transient state of one mounted plan selection view.
///
/// The error, once set, stays until a later failure overwrites it. Selecting
/// another plan leaves it alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubscriptionState {
    selected: PlanId,
    error: Option<String>,
}

impl SubscriptionState {
    pub fn new(selected: PlanId) -> Self {
        Self {
            selected,
            error: None,
        }
    }

    pub fn selected(&self) -> PlanId {
        self.selected
    }

    pub fn selected_plan(&self) -> &'static Plan {
        self.selected.plan()
    }

    pub fn subscribe_label(&self) -> String {
        format!("Subscribe to {}", self.selected_plan().title)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn view_state(&self) -> ViewState {
        match self.error {
            Some(_) => ViewState::ErrorShown,
            None => ViewState::Idle,
        }
    }

    /// Returns whether the selection changed.
    pub fn select(&mut self, id: PlanId) -> bool {
        if self.selected == id {
            return false;
        }
        debug!("Plan selected: {}", id);
        self.selected = id;
        true
    }

    pub fn cards(&self) -> Vec<PlanCardModel> {
        PlanId::ALL
            .into_iter()
            .map(|id| PlanCardModel {
                plan: id.plan(),
                selected: id == self.selected,
            })
            .collect()
    }

    /// Sends the browser to the selected plan's checkout page, or records why
    /// it could not. On success the returned URL is the one navigated to.
    pub fn subscribe(
        &mut self,
        session: &dyn SessionProvider,
        redirector: &dyn Redirector,
    ) -> Result<&'static str, SubscribeError> {
        match self.try_subscribe(session, redirector) {
            Ok(url) => {
                info!("Redirecting to checkout for {} plan", self.selected);
                Ok(url)
            }
            Err(e) => {
                warn!("Could not start subscription for {} plan: {:?}", self.selected, e);
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    fn try_subscribe(
        &self,
        session: &dyn SessionProvider,
        redirector: &dyn Redirector,
    ) -> Result<&'static str, SubscribeError> {
        if !session.is_logged_in() {
            return Err(SubscribeError::NotLoggedIn);
        }
        let url = self.selected_plan().checkout_url;
        redirector.redirect(url)?;
        Ok(url)
    }
}

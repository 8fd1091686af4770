//! Checkout flows for catalogue products and the course.
//!
//! A flow walks `Selecting -> AwaitingPayment -> Confirmed`. While awaiting
//! payment a background task polls the API; that task belongs to the flow and
//! is cancelled by [`CheckoutFlow::close`] or when the flow is dropped.

use std::{sync::Arc, time::Duration};

use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use vitrine_app::tokens::opaque_token;

use crate::{
    api::{PixCharge, StorefrontApi},
    catalog::ProductKey,
    errors::{GENERIC_ALERT, StorefrontError},
};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

pub const DEFAULT_COMMUNITY_LINK: &str = "https://t.me/seugrupodotelegram";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    /// Template purchase; the shopper picks a product first.
    Product,
    /// Course purchase; always pre-selected.
    Course,
}

/// What the shopper receives once payment clears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Download {
        link: String,
    },
    Community {
        link: String,
        access_token: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    Selecting {
        selected: Option<ProductKey>,
        alert: Option<String>,
    },
    /// `charge` is `None` while the order is still being issued.
    AwaitingPayment {
        product: ProductKey,
        charge: Option<PixCharge>,
    },
    Confirmed {
        product: ProductKey,
        access: Access,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSettings {
    pub poll_interval: Duration,
    pub community_link: String,
}

impl Default for CheckoutSettings {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            community_link: DEFAULT_COMMUNITY_LINK.to_string(),
        }
    }
}

impl FlowKind {
    fn initial_state(self, alert: Option<String>) -> FlowState {
        let selected = match self {
            Self::Product => None,
            Self::Course => Some(ProductKey::Curso),
        };

        FlowState::Selecting { selected, alert }
    }

    fn access(
        self,
        product: ProductKey,
        token: Option<String>,
        settings: &CheckoutSettings,
    ) -> Access {
        match self {
            Self::Product => Access::Download {
                link: format!("/download?file={product}&token={}", opaque_token()),
            },
            Self::Course => Access::Community {
                link: settings.community_link.clone(),
                access_token: token,
            },
        }
    }
}

pub struct CheckoutFlow {
    kind: FlowKind,
    api: Arc<dyn StorefrontApi>,
    settings: CheckoutSettings,
    state: Arc<watch::Sender<FlowState>>,
    poller: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for CheckoutFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutFlow")
            .field("kind", &self.kind)
            .field("state", &*self.state.borrow())
            .field("polling", &self.is_polling())
            .finish_non_exhaustive()
    }
}

impl CheckoutFlow {
    #[must_use]
    pub fn new(kind: FlowKind, api: Arc<dyn StorefrontApi>, settings: CheckoutSettings) -> Self {
        let (state, _initial) = watch::channel(kind.initial_state(None));

        Self {
            kind,
            api,
            settings,
            state: Arc::new(state),
            poller: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> FlowKind {
        self.kind
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> FlowState {
        self.state.borrow().clone()
    }

    /// Observe every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FlowState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn is_polling(&self) -> bool {
        self.poller.as_ref().is_some_and(|poller| !poller.is_finished())
    }

    /// Show the flow from the start.
    pub fn open(&mut self) {
        self.reset(None);
    }

    /// Hide the flow and stop any polling.
    pub fn close(&mut self) {
        self.reset(None);
    }

    /// Record the shopper's choice. Only the product flow accepts a choice,
    /// and only before a charge is issued.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::SelectionLocked`] otherwise.
    pub fn select(&mut self, product: ProductKey) -> Result<(), StorefrontError> {
        if self.kind == FlowKind::Course {
            return Err(StorefrontError::SelectionLocked);
        }

        let accepted = self.state.send_if_modified(|state| match state {
            FlowState::Selecting { selected, alert } => {
                *selected = Some(product);
                *alert = None;

                true
            }
            FlowState::AwaitingPayment { .. } | FlowState::Confirmed { .. } => false,
        });

        if accepted {
            Ok(())
        } else {
            Err(StorefrontError::SelectionLocked)
        }
    }

    /// Issue a charge for the selected product and start polling for payment.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::NothingSelected`] without a selection, or the
    /// API error after reverting the flow and raising the generic alert.
    pub async fn proceed(&mut self) -> Result<PixCharge, StorefrontError> {
        let product = match &*self.state.borrow() {
            FlowState::Selecting {
                selected: Some(product),
                ..
            } => *product,
            _ => return Err(StorefrontError::NothingSelected),
        };

        self.stop_polling();
        self.state.send_replace(FlowState::AwaitingPayment {
            product,
            charge: None,
        });

        let charge = match self
            .api
            .generate_pix(product.price(), product.order_kind())
            .await
        {
            Ok(charge) => charge,
            Err(error) => {
                warn!(%product, "failed to issue pix charge: {error}");
                self.reset(Some(GENERIC_ALERT.to_string()));

                return Err(error.into());
            }
        };

        info!(%product, order = %charge.pedido_id, "awaiting payment");

        self.state.send_replace(FlowState::AwaitingPayment {
            product,
            charge: Some(charge.clone()),
        });

        self.poller = Some(tokio::spawn(poll_until_paid(
            self.kind,
            Arc::clone(&self.api),
            Arc::clone(&self.state),
            self.settings.clone(),
            product,
            charge.pedido_id.clone(),
        )));

        Ok(charge)
    }

    fn stop_polling(&mut self) {
        if let Some(poller) = self.poller.take() {
            poller.abort();
        }
    }

    fn reset(&mut self, alert: Option<String>) {
        self.stop_polling();
        self.state.send_replace(self.kind.initial_state(alert));
    }
}

impl Drop for CheckoutFlow {
    fn drop(&mut self) {
        self.stop_polling();
    }
}

/// Whether `state` still awaits payment for `order_id`. A poller that lost a
/// race with `close` must not overwrite the newer state.
fn awaiting(state: &FlowState, order_id: &str) -> bool {
    matches!(
        state,
        FlowState::AwaitingPayment { charge: Some(charge), .. } if charge.pedido_id == order_id
    )
}

async fn poll_until_paid(
    kind: FlowKind,
    api: Arc<dyn StorefrontApi>,
    state: Arc<watch::Sender<FlowState>>,
    settings: CheckoutSettings,
    product: ProductKey,
    order_id: String,
) {
    let mut ticks = time::interval_at(
        Instant::now() + settings.poll_interval,
        settings.poll_interval,
    );
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticks.tick().await;

        let next = match api.check_payment(&order_id).await {
            Ok(status) if status.is_paid() => {
                info!(%product, order = %order_id, "payment confirmed");

                FlowState::Confirmed {
                    product,
                    access: kind.access(product, status.token_acesso, &settings),
                }
            }
            Ok(status) => {
                debug!(order = %order_id, status = %status.status, "payment still pending");

                continue;
            }
            Err(error) => {
                warn!(order = %order_id, "payment check failed: {error}");

                kind.initial_state(Some(GENERIC_ALERT.to_string()))
            }
        };

        state.send_if_modified(|current| {
            if awaiting(current, &order_id) {
                *current = next;

                true
            } else {
                false
            }
        });

        return;
    }
}

//! App Context

use std::{sync::Arc, time::Duration};

use jiff::SignedDuration;

use crate::{
    clock::{Clock, SystemClock},
    domain::{
        access::InMemoryAccessGrantsRepository,
        orders::{
            DEFAULT_GRANT_VALIDITY, ElapsedTimeSettlement, InMemoryOrdersRepository,
            OrdersService, OrdersSettings, PixOrdersService,
            payment::PaymentSettings,
            settlement::DEFAULT_SETTLEMENT_DELAY,
        },
        quotes::{DEFAULT_ACK_DELAY, InMemoryQuotesRepository, InboxQuotesService, QuotesService},
    },
};

/// Tunables for the in-process application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub payment: PaymentSettings,
    /// Time after which the simulated authority settles an order.
    pub settlement_delay: SignedDuration,
    /// Lifetime of a course access grant.
    pub grant_validity: SignedDuration,
    /// Pause before acknowledging a quote request.
    pub quote_ack_delay: Duration,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            payment: PaymentSettings::default(),
            settlement_delay: DEFAULT_SETTLEMENT_DELAY,
            grant_validity: DEFAULT_GRANT_VALIDITY,
            quote_ack_delay: DEFAULT_ACK_DELAY,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub orders: Arc<dyn OrdersService>,
    pub quotes: Arc<dyn QuotesService>,
}

impl AppContext {
    /// Build an application context backed by process-lifetime storage and
    /// the elapsed-time settlement authority.
    #[must_use]
    pub fn in_memory(settings: AppSettings) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let orders = PixOrdersService::new(
            Arc::new(InMemoryOrdersRepository::new()),
            Arc::new(InMemoryAccessGrantsRepository::new()),
            Arc::new(ElapsedTimeSettlement::new(settings.settlement_delay)),
            clock.clone(),
            OrdersSettings {
                payment: settings.payment,
                grant_validity: settings.grant_validity,
            },
        );

        let quotes = InboxQuotesService::new(
            Arc::new(InMemoryQuotesRepository::new()),
            clock,
            settings.quote_ack_delay,
        );

        Self {
            orders: Arc::new(orders),
            quotes: Arc::new(quotes),
        }
    }
}

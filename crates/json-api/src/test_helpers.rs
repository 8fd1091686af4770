//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use vitrine_app::{
    context::AppContext,
    domain::{orders::MockOrdersService, quotes::MockQuotesService},
};

use crate::state::State;

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_issue_order().never();
    orders.expect_check_payment().never();

    orders
}

fn strict_quotes_mock() -> MockQuotesService {
    let mut quotes = MockQuotesService::new();

    quotes.expect_submit_quote().never();

    quotes
}

fn service_with(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    service_with(
        AppContext {
            orders: Arc::new(orders),
            quotes: Arc::new(strict_quotes_mock()),
        },
        route,
    )
}

pub(crate) fn quotes_service(quotes: MockQuotesService, route: Router) -> Service {
    service_with(
        AppContext {
            orders: Arc::new(strict_orders_mock()),
            quotes: Arc::new(quotes),
        },
        route,
    )
}

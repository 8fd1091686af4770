use std::{sync::Arc, time::Duration};

use clap::{Args, Parser, Subcommand};

use vitrine_storefront::{
    api::HttpStorefrontApi,
    checkout::{CheckoutSettings, DEFAULT_COMMUNITY_LINK},
};

mod catalog;
mod checkout;
mod quote;

#[derive(Debug, Parser)]
#[command(name = "vitrine", about = "Vitrine storefront checkout", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    client: ClientArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Args)]
struct ClientArgs {
    /// Base URL of the checkout API
    #[arg(long, env = "VITRINE_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    /// Seconds between payment status checks
    #[arg(long, env = "VITRINE_POLL_INTERVAL_SECONDS", default_value_t = 5)]
    poll_interval_secs: u64,

    /// Community link handed out after a course purchase
    #[arg(long, env = "VITRINE_COMMUNITY_LINK", default_value = DEFAULT_COMMUNITY_LINK)]
    community_link: String,
}

impl ClientArgs {
    fn api(&self) -> Arc<HttpStorefrontApi> {
        Arc::new(HttpStorefrontApi::new(self.api_url.clone()))
    }

    fn settings(&self) -> CheckoutSettings {
        CheckoutSettings {
            poll_interval: Duration::from_secs(self.poll_interval_secs.max(1)),
            community_link: self.community_link.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List catalogue products and prices
    Catalog,
    /// Buy a template and wait for payment
    Checkout(checkout::ProductArgs),
    /// Buy the course and wait for payment
    Course,
    /// Request a quote for custom work
    Quote(quote::QuoteArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Catalog => {
                catalog::run();
                Ok(())
            }
            Commands::Checkout(args) => {
                checkout::run_product(args, self.client.api(), self.client.settings()).await
            }
            Commands::Course => {
                checkout::run_course(self.client.api(), self.client.settings()).await
            }
            Commands::Quote(args) => quote::run(args, self.client.api()).await,
        }
    }
}

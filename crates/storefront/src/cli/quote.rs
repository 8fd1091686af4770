use std::sync::Arc;

use clap::Args;
use tracing::warn;

use vitrine_storefront::{
    api::HttpStorefrontApi,
    quote::{QuoteForm, submit_quote},
};

#[derive(Debug, Args)]
pub(crate) struct QuoteArgs {
    /// Contact e-mail
    #[arg(long, default_value = "")]
    email: String,

    /// Contact WhatsApp number
    #[arg(long, default_value = "")]
    whatsapp: String,

    /// What needs to be built
    #[arg(long = "descricao", default_value = "")]
    description: String,
}

pub(crate) async fn run(args: QuoteArgs, api: Arc<HttpStorefrontApi>) -> Result<(), String> {
    let form = QuoteForm {
        email: args.email,
        whatsapp: args.whatsapp,
        description: args.description,
    };

    let ack = submit_quote(api.as_ref(), form)
        .await
        .map_err(|error| {
            warn!("quote request failed: {error}");

            error.alert().to_string()
        })?;

    println!("{}", ack.message);

    Ok(())
}

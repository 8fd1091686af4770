use std::sync::Arc;

use clap::Args;
use tracing::warn;

use vitrine_storefront::{
    api::HttpStorefrontApi,
    catalog::ProductKey,
    checkout::{Access, CheckoutFlow, CheckoutSettings, FlowKind, FlowState},
    errors::{GENERIC_ALERT, StorefrontError},
};

#[derive(Debug, Args)]
pub(crate) struct ProductArgs {
    /// Catalogue product key, e.g. `site_bancario`
    #[arg(long)]
    product: ProductKey,
}

pub(crate) async fn run_product(
    args: ProductArgs,
    api: Arc<HttpStorefrontApi>,
    settings: CheckoutSettings,
) -> Result<(), String> {
    let mut flow = CheckoutFlow::new(FlowKind::Product, api, settings);

    flow.open();
    flow.select(args.product).map_err(alert)?;

    await_payment(flow).await
}

pub(crate) async fn run_course(
    api: Arc<HttpStorefrontApi>,
    settings: CheckoutSettings,
) -> Result<(), String> {
    await_payment(CheckoutFlow::new(FlowKind::Course, api, settings)).await
}

fn alert(error: StorefrontError) -> String {
    warn!("checkout failed: {error}");

    error.alert().to_string()
}

async fn await_payment(mut flow: CheckoutFlow) -> Result<(), String> {
    let charge = flow.proceed().await.map_err(alert)?;

    println!("pedido: {}", charge.pedido_id);
    println!("valor: R$ {}", charge.valor);
    println!("pix: {}", charge.pix_code);
    println!("qr_code: {}", charge.qr_code);
    println!("Aguardando confirmação do pagamento...");

    let mut states = flow.subscribe();

    let settled = tokio::select! {
        settled = states.wait_for(|state| !matches!(state, FlowState::AwaitingPayment { .. })) => {
            settled.map(|state| state.clone()).map_err(|error| error.to_string())?
        }
        _ = tokio::signal::ctrl_c() => {
            flow.close();

            return Err("checkout cancelled".to_string());
        }
    };

    match settled {
        FlowState::Confirmed {
            access: Access::Download { link },
            ..
        } => {
            println!("Pagamento confirmado!");
            println!("download: {link}");

            Ok(())
        }
        FlowState::Confirmed {
            access: Access::Community { link, access_token },
            ..
        } => {
            println!("Pagamento confirmado!");
            println!("comunidade: {link}");

            if let Some(token) = access_token {
                println!("token_acesso: {token}");
            }

            Ok(())
        }
        FlowState::Selecting {
            alert: Some(alert), ..
        } => Err(alert),
        FlowState::Selecting { alert: None, .. } | FlowState::AwaitingPayment { .. } => {
            Err(GENERIC_ALERT.to_string())
        }
    }
}

//! App Router

use std::sync::Arc;

use salvo::{
    affix_state::inject,
    cors::{AllowOrigin, Cors},
    http::Method,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};

use crate::{
    healthcheck,
    observability::{metrics_handler, request_logging},
    orders, quotes,
    state::State,
};

pub(crate) fn api_router() -> Router {
    Router::with_path("api")
        .push(Router::with_path("gerar-pix").post(orders::create::handler))
        .push(Router::with_path("verificar-pagamento/{order}").get(orders::get::handler))
        .push(Router::with_path("solicitar-orcamento").post(quotes::create::handler))
}

pub(crate) fn app_router(state: Arc<State>) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(request_logging)
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(api_router())
}

/// Attach the OpenAPI document and Swagger UI for every documented route.
pub(crate) fn with_docs(router: Router) -> Router {
    let doc = OpenApi::new("Vitrine API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"))
}

/// Wrap the router in a service that answers cross-origin requests from any
/// storefront origin.
pub(crate) fn service(router: Router) -> Service {
    let cors = Cors::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(vec!["content-type", "x-request-id"])
        .into_handler();

    Service::new(router).hoop(cors)
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use vitrine_app::context::{AppContext, AppSettings};

    use super::*;

    fn in_memory_service() -> Service {
        let settings = AppSettings {
            quote_ack_delay: std::time::Duration::ZERO,
            ..AppSettings::default()
        };

        let state = State::from_app_context(AppContext::in_memory(settings));

        service(with_docs(app_router(state)))
    }

    #[tokio::test]
    async fn issued_order_is_immediately_pending() -> TestResult {
        let service = in_memory_service();

        let mut issued = TestClient::post("http://example.com/api/gerar-pix")
            .json(&json!({ "valor": 299.90, "tipo": "template" }))
            .send(&service)
            .await;

        let body: Value = issued.take_json().await?;
        let pedido_id = body
            .get("pedidoId")
            .and_then(Value::as_str)
            .ok_or("missing pedidoId")?
            .to_owned();

        assert_eq!(issued.status_code, Some(StatusCode::OK));
        assert_eq!(body.get("valor").and_then(Value::as_str), Some("299.90"));

        let mut checked = TestClient::get(format!(
            "http://example.com/api/verificar-pagamento/{pedido_id}"
        ))
        .send(&service)
        .await;

        let status: Value = checked.take_json().await?;

        assert_eq!(checked.status_code, Some(StatusCode::OK));
        assert_eq!(status.get("status").and_then(Value::as_str), Some("pendente"));
        assert_eq!(status.get("tipo").and_then(Value::as_str), Some("template"));

        Ok(())
    }

    #[tokio::test]
    async fn quote_round_trip_through_in_memory_context() -> TestResult {
        let mut res = TestClient::post("http://example.com/api/solicitar-orcamento")
            .json(&json!({
                "email": "ana@example.com",
                "whatsapp": "+55 11 99999-0000",
                "descricao": "Site institucional",
            }))
            .send(&in_memory_service())
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.get("success").and_then(Value::as_bool), Some(true));

        Ok(())
    }

    #[tokio::test]
    async fn blank_quote_fields_are_rejected() -> TestResult {
        let res = TestClient::post("http://example.com/api/solicitar-orcamento")
            .json(&json!({ "email": " ", "whatsapp": "1", "descricao": "x" }))
            .send(&in_memory_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn healthcheck_is_routed() -> TestResult {
        let res = TestClient::get("http://example.com/healthcheck")
            .send(&in_memory_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn openapi_document_lists_checkout_routes() -> TestResult {
        let doc: Value = TestClient::get("http://example.com/api-doc/openapi.json")
            .send(&in_memory_service())
            .await
            .take_json()
            .await?;

        let paths = doc.get("paths").ok_or("missing paths")?;

        for path in [
            "/api/gerar-pix",
            "/api/verificar-pagamento/{order}",
            "/api/solicitar-orcamento",
        ] {
            assert!(paths.get(path).is_some(), "expected {path} in openapi paths");
        }

        Ok(())
    }

    #[tokio::test]
    async fn cross_origin_requests_are_allowed() -> TestResult {
        let res = TestClient::get("http://example.com/healthcheck")
            .add_header("origin", "https://loja.example.com", true)
            .send(&in_memory_service())
            .await;

        assert!(
            res.headers().contains_key("access-control-allow-origin"),
            "expected CORS header"
        );

        Ok(())
    }
}

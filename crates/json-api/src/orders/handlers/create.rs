//! Generate PIX Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use vitrine_app::domain::orders::{
    amount::Amount,
    data::{IssuedOrder, NewOrder},
    records::ProductKind,
};

use crate::{
    errors::ApiError, extensions::*, observability::observe_order_issued,
    orders::errors::PROCESSING_FAILED, state::State,
};

const INVALID_AMOUNT: &str = "Valor inválido";
const INVALID_KIND: &str = "Tipo inválido";

/// Generate PIX Request
#[derive(Debug, Deserialize)]
pub(crate) struct GeneratePixRequest {
    /// Amount to charge, as a JSON number or numeric string
    pub valor: Option<Value>,

    /// Product kind: `template` (default) or `curso`
    pub tipo: Option<String>,
}

impl GeneratePixRequest {
    fn into_new_order(self) -> Result<NewOrder, ApiError> {
        let amount = match self.valor {
            Some(Value::Number(number)) => Amount::parse(&number.to_string()),
            Some(Value::String(text)) => Amount::parse(text.trim()),
            _ => return Err(ApiError::bad_request(INVALID_AMOUNT)),
        }
        .map_err(|_invalid| ApiError::bad_request(INVALID_AMOUNT))?;

        let kind = match self.tipo {
            Some(tipo) => tipo
                .parse::<ProductKind>()
                .map_err(|_unknown| ApiError::bad_request(INVALID_KIND))?,
            None => ProductKind::Template,
        };

        Ok(NewOrder { amount, kind })
    }
}

/// PIX Charge Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PixChargeResponse {
    /// QR code image as a data URI
    pub qr_code: String,

    /// Copyable payment key
    pub pix_code: String,

    /// Charged amount with two decimals
    pub valor: String,

    /// Order identifier used to poll for settlement
    pub pedido_id: Uuid,
}

impl From<IssuedOrder> for PixChargeResponse {
    fn from(order: IssuedOrder) -> Self {
        Self {
            qr_code: order.qr_code,
            pix_code: order.payment_key,
            valor: order.amount.to_string(),
            pedido_id: order.uuid.into_uuid(),
        }
    }
}

/// Generate PIX Handler
///
/// Issues a pending order and returns its payment code.
#[endpoint(
    tags("orders"),
    summary = "Generate PIX payment code",
    responses(
        (status_code = StatusCode::OK, description = "Payment code issued"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<PixChargeResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request = req
        .parse_json::<GeneratePixRequest>()
        .await
        .map_err(|_malformed| ApiError::bad_request(INVALID_AMOUNT))?;

    let new_order = request.into_new_order()?;
    let kind = new_order.kind;

    let issued = state
        .app
        .orders
        .issue_order(new_order)
        .await
        .or_500("failed to issue order", PROCESSING_FAILED)?;

    observe_order_issued(kind.as_str());

    info!(
        order = %issued.uuid,
        kind = kind.as_str(),
        amount = %issued.amount,
        "issued pix charge"
    );

    Ok(Json(issued.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use vitrine_app::domain::orders::{
        MockOrdersService, OrdersServiceError, payment::PaymentCodeError, records::OrderUuid,
    };

    use crate::{errors::ErrorResponse, test_helpers::orders_service};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(orders, Router::with_path("api/gerar-pix").post(handler))
    }

    fn issued(uuid: OrderUuid, amount: &str) -> TestResult<IssuedOrder> {
        Ok(IssuedOrder {
            uuid,
            qr_code: "data:image/svg+xml;base64,PHN2Zz4=".to_string(),
            payment_key: "chave-pix".to_string(),
            amount: Amount::parse(amount)?,
        })
    }

    fn rejecting_mock() -> MockOrdersService {
        let mut orders = MockOrdersService::new();

        orders.expect_issue_order().never();
        orders.expect_check_payment().never();

        orders
    }

    async fn post_error(body: Value) -> TestResult<(Option<StatusCode>, String)> {
        let mut res = TestClient::post("http://example.com/api/gerar-pix")
            .json(&body)
            .send(&make_service(rejecting_mock()))
            .await;

        let error: ErrorResponse = res.take_json().await?;

        Ok((res.status_code, error.error))
    }

    #[tokio::test]
    async fn test_generate_pix_success() -> TestResult {
        let uuid = OrderUuid::new();
        let order = issued(uuid, "299.90")?;
        let expected = NewOrder {
            amount: Amount::parse("299.90")?,
            kind: ProductKind::Template,
        };

        let mut orders = MockOrdersService::new();

        orders
            .expect_issue_order()
            .once()
            .withf(move |new| *new == expected)
            .return_once(move |_| Ok(order));

        orders.expect_check_payment().never();

        let mut res = TestClient::post("http://example.com/api/gerar-pix")
            .json(&json!({ "valor": 299.90, "tipo": "template" }))
            .send(&make_service(orders))
            .await;

        let body: PixChargeResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.pedido_id, uuid.into_uuid());
        assert_eq!(body.valor, "299.90");
        assert_eq!(body.pix_code, "chave-pix");
        assert!(body.qr_code.starts_with("data:image/svg+xml;base64,"));

        Ok(())
    }

    #[tokio::test]
    async fn test_response_uses_camel_case_keys() -> TestResult {
        let uuid = OrderUuid::new();
        let order = issued(uuid, "499.90")?;

        let mut orders = MockOrdersService::new();

        orders
            .expect_issue_order()
            .once()
            .return_once(move |_| Ok(order));

        orders.expect_check_payment().never();

        let mut res = TestClient::post("http://example.com/api/gerar-pix")
            .json(&json!({ "valor": "499.90", "tipo": "curso" }))
            .send(&make_service(orders))
            .await;

        let body: Value = res.take_json().await?;

        for key in ["qrCode", "pixCode", "valor", "pedidoId"] {
            assert!(body.get(key).is_some(), "expected {key} in {body}");
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_tipo_defaults_to_template() -> TestResult {
        let uuid = OrderUuid::new();
        let order = issued(uuid, "10.00")?;

        let mut orders = MockOrdersService::new();

        orders
            .expect_issue_order()
            .once()
            .withf(|new| new.kind == ProductKind::Template)
            .return_once(move |_| Ok(order));

        orders.expect_check_payment().never();

        let res = TestClient::post("http://example.com/api/gerar-pix")
            .json(&json!({ "valor": "10" }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_non_numeric_amount_returns_400() -> TestResult {
        let (status, error) = post_error(json!({ "valor": "abc", "tipo": "template" })).await?;

        assert_eq!(status, Some(StatusCode::BAD_REQUEST));
        assert_eq!(error, INVALID_AMOUNT);

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_amount_returns_400() -> TestResult {
        let (status, error) = post_error(json!({ "tipo": "curso" })).await?;

        assert_eq!(status, Some(StatusCode::BAD_REQUEST));
        assert_eq!(error, INVALID_AMOUNT);

        Ok(())
    }

    #[tokio::test]
    async fn test_non_positive_amount_returns_400() -> TestResult {
        for valor in [json!(0), json!(-5), json!("0.001")] {
            let (status, error) = post_error(json!({ "valor": valor })).await?;

            assert_eq!(status, Some(StatusCode::BAD_REQUEST), "valor {valor}");
            assert_eq!(error, INVALID_AMOUNT);
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_tipo_returns_400() -> TestResult {
        let (status, error) = post_error(json!({ "valor": 10, "tipo": "ebook" })).await?;

        assert_eq!(status, Some(StatusCode::BAD_REQUEST));
        assert_eq!(error, INVALID_KIND);

        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_body_returns_400() -> TestResult {
        let res = TestClient::post("http://example.com/api/gerar-pix")
            .raw_json("{not json")
            .send(&make_service(rejecting_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_issue_failure_returns_500() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_issue_order().once().return_once(|_| {
            Err(OrdersServiceError::PaymentCode(PaymentCodeError::Encode(
                "data too long".to_string(),
            )))
        });

        orders.expect_check_payment().never();

        let mut res = TestClient::post("http://example.com/api/gerar-pix")
            .json(&json!({ "valor": 299.90 }))
            .send(&make_service(orders))
            .await;

        let error: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(error.error, PROCESSING_FAILED);

        Ok(())
    }
}

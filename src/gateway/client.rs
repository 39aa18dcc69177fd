//! HTTP client for the PIX payment provider.

use reqwest::Client;

use super::models::{ChargeEnvelope, CreateChargeRequest, PixCharge};
use crate::error::GatewayError;

/// Thin client over the provider's charge-creation endpoint.
///
/// Holds the API credential loaded at startup. The credential is optional so
/// the service can boot without it; charge creation fails fast with a
/// configuration error until it is set.
#[derive(Debug, Clone)]
pub struct PixClient {
    http: Client,
    api_key: Option<String>,
    base_url: String,
}

impl PixClient {
    /// Creates a new client against the given provider base URL.
    #[must_use]
    pub fn new(api_key: Option<String>, base_url: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Creates a PIX QR-code charge at the provider.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::MissingCredential`] when no API key is
    /// configured, and [`GatewayError::ChargeRejected`] carrying the
    /// provider's message verbatim on any provider-side failure.
    pub async fn create_charge(
        &self,
        request: &CreateChargeRequest,
    ) -> Result<PixCharge, GatewayError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GatewayError::MissingCredential)?;

        let response = self
            .http
            .post(format!("{}/pixQrCode/create", self.base_url))
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::ChargeRejected(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // The provider wraps error messages in `{"error": "..."}`; fall
            // back to the raw body when the shape differs.
            let message = serde_json::from_str::<ChargeEnvelope>(&body)
                .ok()
                .and_then(|envelope| envelope.error)
                .unwrap_or(body);
            tracing::warn!(status = %status, "provider rejected charge");
            return Err(GatewayError::ChargeRejected(message));
        }

        let envelope: ChargeEnvelope = response
            .json()
            .await
            .map_err(|e| GatewayError::ChargeRejected(e.to_string()))?;

        if let Some(message) = envelope.error {
            return Err(GatewayError::ChargeRejected(message));
        }

        envelope.data.ok_or_else(|| {
            GatewayError::ChargeRejected("provider returned no charge data".to_string())
        })
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::gateway::models::{ChargeCustomer, ChargeMetadata};

    fn make_request() -> CreateChargeRequest {
        CreateChargeRequest {
            amount: 1000,
            expires_in: 300,
            description: "test".to_string(),
            customer: ChargeCustomer {
                name: "n".to_string(),
                cellphone: "c".to_string(),
                email: "e".to_string(),
                tax_id: "t".to_string(),
            },
            metadata: ChargeMetadata {
                external_id: "rifa_x_1".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn missing_credential_fails_fast() {
        let client = PixClient::new(None, "http://localhost:9".to_string());
        let result = client.create_charge(&make_request()).await;
        assert!(matches!(result, Err(GatewayError::MissingCredential)));
    }
}

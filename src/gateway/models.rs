//! Wire types for the PIX provider API.
//!
//! Request and response shapes follow the provider's camelCase JSON. The
//! charge payload ([`PixCharge`]) is passed through to the storefront so the
//! buyer can render the QR code.

use serde::{Deserialize, Serialize};

/// Webhook event name the provider sends when a charge is paid.
pub const PAID_EVENT: &str = "billing.paid";

/// Charge status value that accompanies a paid notification.
pub const PAID_STATUS: &str = "PAID";

/// Request body for creating a PIX QR-code charge.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChargeRequest {
    /// Charge amount in cents (integer minor units).
    pub amount: i64,
    /// Seconds until the charge expires at the provider.
    pub expires_in: u64,
    /// Description shown in the buyer's banking app.
    pub description: String,
    /// Payer details required by the PIX rail.
    pub customer: ChargeCustomer,
    /// Caller metadata echoed back through the webhook.
    pub metadata: ChargeMetadata,
}

/// Payer details attached to a charge.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeCustomer {
    /// Payer's full name.
    pub name: String,
    /// Payer's phone number.
    pub cellphone: String,
    /// Payer's email address.
    pub email: String,
    /// Payer's CPF/CNPJ.
    pub tax_id: String,
}

/// Caller metadata echoed back through the webhook.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeMetadata {
    /// Charge tag of the form `rifa_<raffleId>_<timestampMillis>`.
    pub external_id: String,
}

/// A created PIX charge as returned by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixCharge {
    /// Provider charge identifier; stored as `payment_id` on ticket rows.
    pub id: String,
    /// Charge amount in cents.
    pub amount: i64,
    /// Provider-side charge status (e.g. `"PENDING"`).
    pub status: String,
    /// Copy-and-paste PIX code.
    pub br_code: String,
    /// Base64-encoded QR-code image.
    pub br_code_base64: String,
    /// Provider-side expiry timestamp, passed through as received.
    #[serde(default)]
    pub expires_at: Option<String>,
}

/// Envelope the provider wraps charge responses in.
#[derive(Debug, Deserialize)]
pub struct ChargeEnvelope {
    /// Present on success.
    pub data: Option<PixCharge>,
    /// Present on failure; the message is surfaced to the buyer verbatim.
    pub error: Option<String>,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn charge_request_serializes_camel_case() {
        let req = CreateChargeRequest {
            amount: 1500,
            expires_in: 300,
            description: "Rifa do iPhone - 3 numeros".to_string(),
            customer: ChargeCustomer {
                name: "Maria Silva".to_string(),
                cellphone: "+5511999990000".to_string(),
                email: "maria@example.com".to_string(),
                tax_id: "12345678901".to_string(),
            },
            metadata: ChargeMetadata {
                external_id: "rifa_abc_123".to_string(),
            },
        };
        let json = serde_json::to_string(&req).unwrap_or_default();
        assert!(json.contains("\"expiresIn\":300"));
        assert!(json.contains("\"taxId\""));
        assert!(json.contains("\"externalId\":\"rifa_abc_123\""));
    }

    #[test]
    fn charge_envelope_success_deserializes() {
        let json = r#"{
            "data": {
                "id": "pix_char_123",
                "amount": 1500,
                "status": "PENDING",
                "brCode": "00020126...",
                "brCodeBase64": "iVBORw0KGgo=",
                "expiresAt": "2026-08-06T12:05:00Z"
            },
            "error": null
        }"#;
        let envelope: Result<ChargeEnvelope, _> = serde_json::from_str(json);
        let Ok(envelope) = envelope else {
            panic!("envelope failed to deserialize");
        };
        let Some(charge) = envelope.data else {
            panic!("expected charge data");
        };
        assert_eq!(charge.id, "pix_char_123");
        assert_eq!(charge.br_code, "00020126...");
        assert!(envelope.error.is_none());
    }

    #[test]
    fn charge_envelope_error_deserializes() {
        let json = r#"{ "data": null, "error": "amount below minimum" }"#;
        let envelope: Result<ChargeEnvelope, _> = serde_json::from_str(json);
        let Ok(envelope) = envelope else {
            panic!("envelope failed to deserialize");
        };
        assert!(envelope.data.is_none());
        assert_eq!(envelope.error.as_deref(), Some("amount below minimum"));
    }
}

//! Provider webhook DTOs.
//!
//! Shape of the asynchronous payment notification the PIX provider posts to
//! `POST /pix/webhook`. Unknown fields are ignored so provider-side payload
//! additions do not break deserialization.

use serde::Deserialize;
use utoipa::ToSchema;

/// Top-level webhook payload.
#[derive(Debug, Deserialize, ToSchema)]
pub struct WebhookPayload {
    /// Event name, e.g. `"billing.paid"`.
    pub event: String,
    /// Event data envelope.
    pub data: WebhookData,
}

/// Event data carried by the notification.
#[derive(Debug, Deserialize, ToSchema)]
pub struct WebhookData {
    /// Charge the event refers to.
    #[serde(rename = "pixQrCode")]
    pub pix_qr_code: WebhookCharge,
    /// Metadata echoed back from charge creation.
    pub metadata: WebhookMetadata,
}

/// Charge summary embedded in the notification.
#[derive(Debug, Deserialize, ToSchema)]
pub struct WebhookCharge {
    /// Provider charge id.
    pub id: String,
    /// Charge status at the provider, e.g. `"PAID"`.
    pub status: String,
}

/// Caller metadata echoed back by the provider.
#[derive(Debug, Deserialize, ToSchema)]
pub struct WebhookMetadata {
    /// The `rifa_<raffleId>_<timestampMillis>` tag set at charge creation.
    #[serde(rename = "externalId")]
    pub external_id: String,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn provider_payload_deserializes() {
        let json = r#"{
            "event": "billing.paid",
            "data": {
                "pixQrCode": { "id": "pix_char_123", "status": "PAID" },
                "metadata": { "externalId": "rifa_3fa85f64-5717-4562-b3fc-2c963f66afa6_1722000000000" },
                "payment": { "amount": 1500 }
            }
        }"#;
        let payload: Result<WebhookPayload, _> = serde_json::from_str(json);
        let Ok(payload) = payload else {
            panic!("payload failed to deserialize");
        };
        assert_eq!(payload.event, "billing.paid");
        assert_eq!(payload.data.pix_qr_code.id, "pix_char_123");
        assert_eq!(payload.data.pix_qr_code.status, "PAID");
        assert!(payload.data.metadata.external_id.starts_with("rifa_"));
    }

    #[test]
    fn missing_metadata_rejected() {
        let json = r#"{
            "event": "billing.paid",
            "data": { "pixQrCode": { "id": "x", "status": "PAID" } }
        }"#;
        let payload: Result<WebhookPayload, _> = serde_json::from_str(json);
        assert!(payload.is_err());
    }
}

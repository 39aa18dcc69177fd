//! Charge creation DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::RaffleId;
use crate::gateway::PixCharge;

/// Request body for `POST /pix/charges`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePixRequest {
    /// Total price in BRL.
    pub amount: f64,
    /// Charge description shown in the buyer's banking app.
    pub description: String,
    /// Payer details forwarded to the PIX provider.
    pub customer: CustomerDto,
    /// Raffle the numbers belong to.
    pub raffle_id: RaffleId,
    /// Numbers the buyer selected.
    pub selected_numbers: Vec<i32>,
    /// Email stored on the ticket rows; the status poller matches on it.
    pub user_email: String,
}

/// Payer details as submitted by the storefront.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    /// Payer's full name.
    pub name: String,
    /// Payer's phone number.
    pub cellphone: String,
    /// Payer's email address.
    pub email: String,
    /// Payer's CPF/CNPJ.
    pub tax_id: String,
}

/// Response body for `POST /pix/charges`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePixResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// QR-code payload for the buyer to pay.
    pub pix_data: PixDataDto,
    /// How many ticket rows were reserved.
    pub tickets_reserved: u64,
}

/// The charge payload passed through to the storefront.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PixDataDto {
    /// Provider charge identifier; poll with it.
    pub id: String,
    /// Charge amount in cents.
    pub amount: i64,
    /// Provider-side charge status.
    pub status: String,
    /// Copy-and-paste PIX code.
    pub br_code: String,
    /// Base64-encoded QR-code image.
    pub br_code_base64: String,
    /// Provider-side expiry timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

impl From<PixCharge> for PixDataDto {
    fn from(charge: PixCharge) -> Self {
        Self {
            id: charge.id,
            amount: charge.amount,
            status: charge.status,
            br_code: charge.br_code,
            br_code_base64: charge.br_code_base64,
            expires_at: charge.expires_at,
        }
    }
}

//! PostgreSQL implementation of the ticket store.
//!
//! The shared `tickets` table is the only coordination point between the
//! reservation, reconciliation, and sweep paths. Every mutation here is a
//! single conditional statement (or one short transaction), so correctness
//! rests on row-level atomicity and the `(raffle_id, number)` uniqueness
//! constraint rather than any in-process locking.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::models::{ChargeTicket, ReleasedTicket};
use crate::domain::{BuyerInfo, PaymentStatus, RaffleId, TicketStatus};
use crate::error::GatewayError;

/// Parameters for one bulk reservation insert.
#[derive(Debug)]
pub struct NewReservation<'a> {
    /// Raffle the numbers belong to.
    pub raffle_id: RaffleId,
    /// Numbers to reserve.
    pub numbers: &'a [i32],
    /// Provider charge id linking the rows.
    pub payment_id: &'a str,
    /// Absolute expiry of the reservation.
    pub reserved_until: DateTime<Utc>,
    /// Buyer snapshot stored on each row.
    pub buyer: &'a BuyerInfo,
}

/// PostgreSQL-backed ticket store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct TicketStore {
    pool: PgPool,
}

impl TicketStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Atomically reserves all requested numbers, or none of them.
    ///
    /// Runs in one transaction: rows for the requested numbers whose
    /// reservation has already lapsed are reclaimed first (an expired row no
    /// longer holds its number), then one `reserved/pending` row per number
    /// is inserted with `ON CONFLICT DO NOTHING`. If any number is still
    /// held by a live row the insert lands short, the transaction rolls
    /// back, and the caller gets the distinct unavailability error.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NumbersUnavailable`] when at least one number
    /// is already reserved or sold, [`GatewayError::Persistence`] on
    /// database failure.
    pub async fn reserve(&self, reservation: &NewReservation<'_>) -> Result<u64, GatewayError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| GatewayError::Persistence(e.to_string()))?;

        sqlx::query(
            "DELETE FROM tickets \
             WHERE raffle_id = $1 AND number = ANY($2) \
               AND status = $3 AND reserved_until < now()",
        )
        .bind(reservation.raffle_id.as_uuid())
        .bind(reservation.numbers)
        .bind(TicketStatus::Reserved.as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| GatewayError::Persistence(e.to_string()))?;

        let result = sqlx::query(
            "INSERT INTO tickets \
             (raffle_id, number, status, payment_status, payment_id, reserved_until, \
              buyer_name, buyer_email, buyer_phone) \
             SELECT $1, n, $2, $3, $4, $5, $6, $7, $8 FROM UNNEST($9::int4[]) AS n \
             ON CONFLICT (raffle_id, number) DO NOTHING",
        )
        .bind(reservation.raffle_id.as_uuid())
        .bind(TicketStatus::Reserved.as_str())
        .bind(PaymentStatus::Pending.as_str())
        .bind(reservation.payment_id)
        .bind(reservation.reserved_until)
        .bind(&reservation.buyer.name)
        .bind(&reservation.buyer.email)
        .bind(reservation.buyer.phone.as_deref())
        .bind(reservation.numbers)
        .execute(&mut *tx)
        .await
        .map_err(|e| GatewayError::Persistence(e.to_string()))?;

        if result.rows_affected() < reservation.numbers.len() as u64 {
            tx.rollback()
                .await
                .map_err(|e| GatewayError::Persistence(e.to_string()))?;
            return Err(GatewayError::NumbersUnavailable);
        }

        tx.commit()
            .await
            .map_err(|e| GatewayError::Persistence(e.to_string()))?;

        Ok(result.rows_affected())
    }

    /// Transitions all pending rows of one charge to sold/paid.
    ///
    /// Keyed on both `raffle_id` and `payment_id` so two in-flight charges
    /// for the same raffle cannot contaminate each other. The
    /// `payment_status = 'pending'` predicate makes replays match zero rows.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on database failure.
    pub async fn mark_paid(
        &self,
        raffle_id: RaffleId,
        payment_id: &str,
    ) -> Result<Vec<i32>, GatewayError> {
        let rows = sqlx::query_as::<_, (i32,)>(
            "UPDATE tickets \
             SET status = $1, payment_status = $2, payment_method = 'pix', \
                 purchase_date = now(), updated_at = now() \
             WHERE raffle_id = $3 AND payment_id = $4 AND payment_status = $5 \
             RETURNING number",
        )
        .bind(TicketStatus::Sold.as_str())
        .bind(PaymentStatus::Paid.as_str())
        .bind(raffle_id.as_uuid())
        .bind(payment_id)
        .bind(PaymentStatus::Pending.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| GatewayError::Persistence(e.to_string()))?;

        Ok(rows.into_iter().map(|(number,)| number).collect())
    }

    /// Loads the rows of one charge for the status poller. Read-only.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on database failure or when a
    /// stored payment status cannot be interpreted.
    pub async fn charge_rows(
        &self,
        payment_id: &str,
        buyer_email: &str,
        raffle_id: RaffleId,
    ) -> Result<Vec<ChargeTicket>, GatewayError> {
        let rows = sqlx::query_as::<_, (i32, String)>(
            "SELECT number, payment_status FROM tickets \
             WHERE payment_id = $1 AND buyer_email = $2 AND raffle_id = $3 \
             ORDER BY number",
        )
        .bind(payment_id)
        .bind(buyer_email)
        .bind(raffle_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| GatewayError::Persistence(e.to_string()))?;

        rows.into_iter()
            .map(|(number, status)| {
                let payment_status = PaymentStatus::parse_str(&status).ok_or_else(|| {
                    GatewayError::Persistence(format!("unknown payment status: {status}"))
                })?;
                Ok(ChargeTicket {
                    number,
                    payment_status,
                })
            })
            .collect()
    }

    /// Deletes every reservation whose expiry has passed unpaid.
    ///
    /// The delete predicate re-checks `status = 'reserved'`, so a row
    /// concurrently transitioned to `sold` between any earlier read and this
    /// statement is excluded by the predicate itself, not by locking.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on database failure.
    pub async fn delete_expired(&self) -> Result<Vec<ReleasedTicket>, GatewayError> {
        let rows = sqlx::query_as::<_, (uuid::Uuid, i32)>(
            "DELETE FROM tickets \
             WHERE status = $1 AND reserved_until < now() \
             RETURNING raffle_id, number",
        )
        .bind(TicketStatus::Reserved.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| GatewayError::Persistence(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(raffle_id, number)| ReleasedTicket {
                raffle_id: RaffleId::from_uuid(raffle_id),
                number,
            })
            .collect())
    }
}

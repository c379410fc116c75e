//! Axum route handler for the contact endpoint.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::contact::form::{ContactForm, FormField};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactReceipt {
    pub status: &'static str,
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
}

/// POST /api/contact
///
/// Every field is required. The message body is never logged.
pub async fn handle_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<Json<ContactReceipt>, AppError> {
    let missing = form.missing_fields();
    if !missing.is_empty() {
        let names: Vec<_> = missing.into_iter().map(FormField::as_str).collect();
        return Err(AppError::Validation(format!(
            "Missing required fields: {}",
            names.join(", ")
        )));
    }

    let received = state.inbox.push(form).await;
    info!(
        id = %received.id,
        from = %received.form.email,
        subject = %received.form.subject,
        "Contact message received"
    );

    Ok(Json(ContactReceipt {
        status: "received",
        id: received.id,
        received_at: received.received_at,
    }))
}

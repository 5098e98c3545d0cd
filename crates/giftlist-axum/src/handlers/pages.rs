//! HTML page handlers.
//!
//! These never surface an error to the visitor: a failed read renders an
//! empty list and every purchase attempt redirects back to the list.

use axum::Form;
use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::response::{Html, Redirect};
use serde::Deserialize;

use crate::state::AppState;
use crate::view::render_gift_page;

/// Render the gift list page.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let gifts = state.registry.list_gifts().await;
    Html(render_gift_page(&gifts))
}

/// Purchase form body.
#[derive(Debug, Deserialize)]
pub struct PurchaseForm {
    pub gift_id: Option<String>,
}

/// Handle a purchase form submission.
///
/// Success, an already bought gift, a failure and an unreadable form body
/// all redirect to `/`.
pub async fn purchase(
    State(state): State<AppState>,
    form: Result<Form<PurchaseForm>, FormRejection>,
) -> Redirect {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Ignoring unreadable purchase form");
            return Redirect::to("/");
        }
    };

    match form.gift_id.as_deref().map(str::trim) {
        Some(gift_id) if !gift_id.is_empty() => {
            state.registry.mark_bought(gift_id).await;
        }
        _ => tracing::debug!("Purchase form submitted without gift_id"),
    }

    Redirect::to("/")
}

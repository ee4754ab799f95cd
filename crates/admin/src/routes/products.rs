//! Product action handler (generate one / delete all).

use std::str::FromStr;

use axum::{
    Form, Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    error::AppError,
    shopify::{CreatedProduct, DeletedProduct, GraphQLTransport},
    state::AppState,
};

/// Form posted by the embedded app page.
#[derive(Debug, Deserialize)]
pub struct ActionForm {
    #[serde(rename = "actionType")]
    pub action_type: Option<String>,
}

/// The two actions the page can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductAction {
    Generate,
    Delete,
}

impl FromStr for ProductAction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generate" => Ok(Self::Generate),
            "delete" => Ok(Self::Delete),
            other => Err(AppError::BadRequest(format!("unknown action: {other}"))),
        }
    }
}

/// Response for `actionType=generate`.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub product: CreatedProduct,
}

/// Response for `actionType=delete`.
///
/// `deleted_product` is `{id: "", handle: ""}` when nothing was deleted.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub deleted_product: DeletedProduct,
    pub deleted_count: usize,
}

/// Dispatch a product action.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for a missing or unknown `actionType` and
/// `AppError::Shopify` when any remote call fails.
#[instrument(skip(state))]
pub async fn action<T: GraphQLTransport + 'static>(
    State(state): State<AppState<T>>,
    Form(form): Form<ActionForm>,
) -> Result<Response, AppError> {
    let action = form
        .action_type
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("missing actionType".to_string()))?
        .parse::<ProductAction>()?;

    match action {
        ProductAction::Generate => {
            let product = state.products().create_random_product().await?;
            Ok(Json(GenerateResponse { product }).into_response())
        }
        ProductAction::Delete => {
            let report = state.products().delete_all_products().await?;
            Ok(Json(DeleteResponse {
                deleted_product: report.last_deleted_or_empty(),
                deleted_count: report.deleted_count,
            })
            .into_response())
        }
    }
}

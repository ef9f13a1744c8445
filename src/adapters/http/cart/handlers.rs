//! HTTP handlers for the cart lifecycle endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::cart::{
    CreateEmptyCartCommand, CreateEmptyCartHandler, DeactivateCartCommand, DeactivateCartHandler,
};
use crate::domain::cart::CartError;
use crate::domain::foundation::CartId;
use crate::ports::{CartRepository, CustomerRepository, StoreContext};

use super::dto::{CreateCartRequest, CreateCartResponse};
use crate::adapters::http::error::ErrorResponse;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct CartAppState {
    pub customer_repository: Arc<dyn CustomerRepository>,
    pub cart_repository: Arc<dyn CartRepository>,
    pub store_context: Arc<dyn StoreContext>,
}

impl CartAppState {
    pub fn create_empty_cart_handler(&self) -> CreateEmptyCartHandler {
        CreateEmptyCartHandler::new(
            self.customer_repository.clone(),
            self.cart_repository.clone(),
            self.store_context.clone(),
        )
    }

    pub fn deactivate_cart_handler(&self) -> DeactivateCartHandler {
        DeactivateCartHandler::new(self.cart_repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /subscribepro/carts - Create an empty cart for a customer
pub async fn create_cart(
    State(state): State<CartAppState>,
    Json(request): Json<CreateCartRequest>,
) -> Result<impl IntoResponse, CartApiError> {
    let handler = state.create_empty_cart_handler();
    let cmd = CreateEmptyCartCommand {
        customer_id: request.customer_id,
    };

    let cart_id = handler.handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(CreateCartResponse { cart_id })))
}

/// POST /subscribepro/carts/:cart_id/deactivate - Deactivate a cart
pub async fn deactivate_cart(
    State(state): State<CartAppState>,
    Path(cart_id): Path<u64>,
) -> Result<impl IntoResponse, CartApiError> {
    let handler = state.deactivate_cart_handler();
    let cmd = DeactivateCartCommand {
        cart_id: CartId::new(cart_id),
    };

    handler.handle(cmd).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts cart errors to HTTP responses.
pub struct CartApiError(CartError);

impl From<CartError> for CartApiError {
    fn from(err: CartError) -> Self {
        Self(err)
    }
}

impl IntoResponse for CartApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code) = match &self.0 {
            CartError::CustomerNotFound(_) => (StatusCode::NOT_FOUND, "CUSTOMER_NOT_FOUND"),
            CartError::CartNotFound(_) => (StatusCode::NOT_FOUND, "CART_NOT_FOUND"),
            CartError::CouldNotSave(_) => (StatusCode::INTERNAL_SERVER_ERROR, "COULD_NOT_SAVE"),
            CartError::Infrastructure(detail) => {
                tracing::error!("Cart infrastructure failure: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ErrorResponse::new(error_code, self.0.message());
        (status, Json(body)).into_response()
    }
}

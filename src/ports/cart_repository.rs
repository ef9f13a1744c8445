//! Cart repository port.
//!
//! Persists host quotes. Locking and isolation belong to the host; the last
//! write to a quote wins.

use async_trait::async_trait;

use crate::domain::cart::Quote;
use crate::domain::foundation::{CartId, DomainError};

#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Find a quote by id.
    ///
    /// Returns `None` if the quote does not exist.
    async fn find_by_id(&self, id: CartId) -> Result<Option<Quote>, DomainError>;

    /// Insert or update a quote.
    ///
    /// Returns the quote id, assigning one when `quote.id` is `None`.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, quote: &Quote) -> Result<CartId, DomainError>;
}

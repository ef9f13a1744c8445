//! Card catalog port.
//!
//! The host platform owns the list of card brands it can display and the
//! artwork that goes with them.

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::domain::foundation::DomainError;
use crate::domain::gateway::CardIcon;

#[async_trait]
pub trait CardCatalog: Send + Sync {
    /// Card type code to display name, for every brand the host supports.
    async fn card_types(&self) -> Result<BTreeMap<String, String>, DomainError>;

    /// URL of the "where is my CVV" illustration.
    async fn cvv_image_url(&self) -> Result<String, DomainError>;

    /// Brand icons keyed by card type code.
    async fn icons(&self) -> Result<BTreeMap<String, CardIcon>, DomainError>;
}

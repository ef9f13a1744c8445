//! Stored payment profiles and their 3-D Secure state.
//!
//! Checkout only reads the 3DS status; the challenge flow itself runs in the
//! SubscribePro vault.

mod profile;
mod three_ds;

pub use profile::PaymentProfile;
pub use three_ds::{ThreeDsStatus, ACTIVE_THREE_DS_STATUSES};

//! SubscribePro payment gateway settings as seen by checkout.

mod checkout_config;

pub use checkout_config::{restrict_card_types, CardIcon, CheckoutConfig, METHOD_CODE, VAULT_CODE};

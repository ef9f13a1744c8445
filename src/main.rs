//! Development server for the SubscribePro checkout endpoints.
//!
//! Runs every endpoint against the in-memory adapters.

use std::error::Error;
use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use subscribe_pro_checkout::adapters::{
    api_router, with_server_layers, ApplePayAppState, CartAppState, GatewayAppState,
    InMemoryCartRepository, InMemoryCustomerRepository, InMemoryQuotePricing, StaticCardCatalog,
    StaticStoreContext,
};
use subscribe_pro_checkout::config::AppConfig;
use subscribe_pro_checkout::domain::applepay::ShippingMethodOption;
use subscribe_pro_checkout::domain::foundation::CustomerId;
use subscribe_pro_checkout::ports::Customer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);

    config.validate()?;
    tracing::info!(
        "Configuration loaded: host={}, port={}, environment={:?}",
        config.server.host,
        config.server.port,
        config.server.environment
    );

    let quote_pricing = InMemoryQuotePricing::new(
        Decimal::new(2000, 2),
        vec![
            ShippingMethodOption::new("flatrate_flatrate")
                .with_label("Flat Rate")
                .with_detail("Fixed")
                .with_amount(Decimal::new(500, 2)),
            ShippingMethodOption::new("express_express")
                .with_label("Express")
                .with_detail("Next day")
                .with_amount(Decimal::new(1500, 2)),
        ],
    );
    let customers = InMemoryCustomerRepository::with_customers([Customer {
        id: CustomerId::new(1),
        email: "shopper@example.com".to_string(),
    }]);

    let router = api_router(
        ApplePayAppState::new(Arc::new(quote_pricing)),
        CartAppState {
            customer_repository: Arc::new(customers),
            cart_repository: Arc::new(InMemoryCartRepository::new()),
            store_context: Arc::new(StaticStoreContext::default()),
        },
        GatewayAppState {
            settings: Arc::new(config.gateway.clone()),
            card_catalog: Arc::new(StaticCardCatalog::default()),
        },
    );
    let app = with_server_layers(router, &config.server);

    tracing::info!("Infrastructure initialized (in-memory mode)");

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("SubscribePro checkout listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("SubscribePro checkout stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured filter. Production logs are JSON.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C signal handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

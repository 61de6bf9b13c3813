//! Bridge server - Entry point.

use bridge_server::{
    api::{create_router, AppState},
    book::load_address_book,
    config::Config,
};
use bridge_core::{AddressDirectory, EmailAliasCodec, MessageRouter, PhoneNumberCodec};
use sendgrid_client::SendGridClient;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vonage_client::VonageClient;

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SMS/email bridge");

    let missing_settings = config.missing_settings();
    if !missing_settings.is_empty() {
        warn!(
            "Missing settings: {}; webhooks will fail until they are set",
            missing_settings.join(", ")
        );
    }

    // Build the phone codec for the configured region
    let phone = match PhoneNumberCodec::new(&config.bridge.default_region) {
        Ok(codec) => codec,
        Err(e) => {
            error!("Invalid default region: {}", e);
            std::process::exit(1);
        }
    };

    // Load the address book and build the directory
    let entries = load_address_book(&config.bridge.address_book_path);
    let directory = AddressDirectory::build(entries, &phone);
    info!("Loaded address book with {} entries", directory.len());
    if !directory.is_consistent() {
        warn!("Address book maps one email to multiple numbers; lookups disabled until fixed");
    }

    let alias = EmailAliasCodec::new(&config.bridge.email_domain, phone.clone());
    let router = MessageRouter::new(
        directory,
        phone,
        alias,
        config.bridge.forwarded_sender.clone(),
    );

    // Initialize delivery clients
    let email_client = match SendGridClient::new(
        config.sendgrid.api_url.clone(),
        config.sendgrid.api_key.clone(),
        config.sendgrid.timeout,
    ) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create SendGrid client: {}", e);
            std::process::exit(1);
        }
    };

    let sms_client = match VonageClient::new(
        config.vonage.api_url.clone(),
        config.vonage.api_key.clone(),
        config.vonage.api_secret.clone(),
        config.vonage.timeout,
    ) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create Vonage client: {}", e);
            std::process::exit(1);
        }
    };

    // Create application state
    let state = AppState::new(
        router,
        Arc::new(email_client),
        Arc::new(sms_client),
        missing_settings,
    );

    // Create router
    let app = create_router(state);

    // Bind to address
    let addr = SocketAddr::new(
        config.server.listen_addr.parse().unwrap_or([0, 0, 0, 0].into()),
        config.server.port,
    );

    info!("Listening on {}", addr);

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Run server
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

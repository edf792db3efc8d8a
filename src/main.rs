use std::time::Duration;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use local_ip_address::local_ip;
use log::info;

use beatcrest::catalog::BeatStore;
use beatcrest::routes::health::ServerStart;
use beatcrest::services::probe;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse()
        .context("PORT must be a number")?;

    let store = web::Data::new(BeatStore::seeded());
    let start = web::Data::new(ServerStart::now());

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(store.clone())
            .app_data(start.clone())
            .configure(beatcrest::configure)
    })
    .bind(("0.0.0.0", port))
    .with_context(|| format!("Failed to bind port {}", port))?;

    println!("🚀 BeatCrest API server running on http://localhost:{}", port);
    if let Ok(ip) = local_ip() {
        println!("   On your network: http://{}:{}", ip, port);
    }

    // Confirm the server answers its own test endpoint once it is up.
    actix_web::rt::spawn(async move {
        let base = format!("http://127.0.0.1:{}", port);
        if probe::wait_for_api(&base, 30, Duration::from_secs(1)).await {
            info!("API connection test passed");
        }
    });

    server.run().await?;
    Ok(())
}

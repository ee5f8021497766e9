mod handlers;

use actix_web::{middleware, web, App, HttpServer};
use clap::Parser;
use common::config::AppConfig;
use sqlx::SqlitePool;

#[derive(Parser, Clone)]
#[command(name = "shopdash")]
pub struct Args {
    #[arg(long, default_value = "8081")]
    pub port: u16,

    #[arg(long, default_value = "stores.db")]
    pub db: String,

    #[arg(long, default_value = "shopdash.toml")]
    pub config: String,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let port = args.port;

    let config = AppConfig::load(&args.config)?;
    let pool = db::init_pool(&args.db).await?;

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    log::info!("Shop dashboard listening on http://localhost:{}", port);
    log::info!("Dashboard at http://localhost:{}/_dashboard/", port);
    log::info!(
        "Proxy function at http://localhost:{}/functions/v1/shopify-proxy (Admin API {})",
        port,
        config.api_version
    );

    let config_data = web::Data::new(config.clone());
    let pool_data = web::Data::new(pool);
    let client_data = web::Data::new(client);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Logger::default())
            .app_data(pool_data.clone())
            .app_data(client_data.clone())
            .app_data(config_data.clone())
            .configure(|cfg| proxy::configure::<SqlitePool, reqwest::Client>(cfg, &config))
            .route("/_dashboard", web::get().to(handlers::home_page))
            .route("/_dashboard/stores", web::get().to(handlers::stores_index))
            .route("/_dashboard/stores/new", web::get().to(handlers::new_store))
            .route("/_dashboard/stores/new", web::post().to(handlers::create_store))
            .route("/_dashboard/stores/{id}", web::get().to(handlers::store_show))
            .route(
                "/_dashboard/stores/{id}/{data_type}",
                web::get().to(handlers::store_data),
            )
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;

    Ok(())
}

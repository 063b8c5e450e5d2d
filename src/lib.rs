//! Memory-module storefront: a filterable product catalog, lead capture,
//! small-quantity checkout and a token-gated admin API.
//!
//! The `data` feature builds only the storage and catalog layers; `server`
//! adds the actix-web application started by [`run`].

#[cfg(feature = "data")]
pub mod catalog;
#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod middleware;
#[cfg(feature = "server")]
pub mod payments;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
pub use server::{api_scope, run};

#[cfg(feature = "server")]
mod server {
    use std::sync::Arc;

    use actix_cors::Cors;
    use actix_web::dev::HttpServiceFactory;
    use actix_web::{App, HttpServer, middleware, web};

    use crate::db::establish_connection_pool;
    use crate::middleware::RequireAdminToken;
    use crate::models::config::ServerConfig;
    use crate::payments::{PaymentGateway, UnconfiguredGateway};
    use crate::repository::DieselRepository;
    use crate::routes::{admin, catalog, checkout, json_config, leads};

    /// The `/api` scope with every public and admin endpoint.
    ///
    /// Handlers expect `web::Data` for [`DieselRepository`], [`ServerConfig`]
    /// and `Arc<dyn PaymentGateway>`.
    pub fn api_scope(admin_token: Option<String>) -> impl HttpServiceFactory {
        web::scope("/api")
            .service(
                web::scope("/admin")
                    .wrap(RequireAdminToken::new(admin_token))
                    .service(admin::dashboard)
                    .service(admin::list_products)
                    .service(admin::create_product)
                    .service(admin::show_product)
                    .service(admin::update_product)
                    .service(admin::delete_product)
                    .service(admin::list_leads),
            )
            .service(catalog::search_products)
            .service(catalog::show_product)
            .service(catalog::sort_options)
            .service(leads::submit_lead)
            .service(checkout::start_checkout)
    }

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        // Establish Diesel connection pool for the SQLite database.
        let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
            std::io::Error::other(format!("Failed to establish database connection: {e}"))
        })?;

        let repo = DieselRepository::new(pool);

        if server_config.admin_token().is_none() {
            log::warn!("admin_token is not set; the admin API will reject every request");
        }
        if server_config.payment_api_key.is_some() {
            log::warn!("No payment provider integration is built in; checkout stays disabled");
        }
        let gateway: Arc<dyn PaymentGateway> = Arc::new(UnconfiguredGateway);

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Logger::default())
                .app_data(json_config())
                .service(api_scope(server_config.admin_token().map(str::to_string)))
                .app_data(web::Data::new(repo.clone()))
                .app_data(web::Data::new(gateway.clone()))
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}

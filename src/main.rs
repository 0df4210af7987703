pub mod api;
pub mod config;
pub mod health;
pub mod logging;
pub mod modules;
pub mod shared;
pub use modules::user;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};
use crate::shared::persistence::{self, SeaOrmTransactionRunner};
use crate::user::adapter::outgoing::{ProfileRepositoryPostgres, UserRepositoryPostgres};
use crate::user::application::services::{
    CreateUserService, DeleteUserService, GetUserListService, GetUserOneService,
    UpdateUserService,
};
use crate::user::application::user_use_cases::UserUseCases;

use actix_web::{middleware, web, App, HttpServer};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;


#[derive(Clone)]
pub struct AppState {
    pub user: UserUseCases,
}

/// Wires every user use case to the SeaORM adapters over one pool.
pub fn build_user_use_cases(db: Arc<DatabaseConnection>) -> UserUseCases {
    let runner = SeaOrmTransactionRunner::new(db);
    let users = UserRepositoryPostgres::new();
    let profiles = ProfileRepositoryPostgres::new();

    UserUseCases {
        create: Arc::new(CreateUserService::new(
            runner.clone(),
            users.clone(),
            profiles.clone(),
        )),
        update: Arc::new(UpdateUserService::new(
            runner.clone(),
            users.clone(),
            profiles,
        )),
        delete: Arc::new(DeleteUserService::new(runner.clone(), users.clone())),
        get_list: Arc::new(GetUserListService::new(runner.clone(), users.clone())),
        get_one: Arc::new(GetUserOneService::new(runner, users)),
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    // Reads .env.{ENV} (or .env) before anything else so LOG_FORMAT/RUST_LOG apply
    let config = AppConfig::from_env()?;

    logging::init_tracing();

    info!("Starting application in {} environment...", config.env);

    let conn = persistence::connect(&config.database).await?;
    info!(
        "Connected to database {} at {}:{}",
        config.database.name, config.database.host, config.database.port
    );

    let db_arc = Arc::new(conn);

    let state = AppState {
        user: build_user_use_cases(Arc::clone(&db_arc)),
    };

    let server_url = config.server_url();
    info!("Listening on {}", server_url);

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .app_data(custom_query_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Users
    cfg.service(crate::user::adapter::incoming::web::routes::create_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::get_users_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::get_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::update_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::delete_user_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}

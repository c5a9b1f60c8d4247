mod api;
mod database;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use services::IdentityClient;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let identity_url = env::var("IDENTITY_API_URL")
        .unwrap_or_else(|_| "https://identitytoolkit.googleapis.com".to_string());
    let identity_key = env::var("IDENTITY_API_KEY").expect("IDENTITY_API_KEY must be set");

    log::info!("🚀 Starting Research Match Service...");
    log::info!("📊 Database: {}", database_url);
    log::info!("🔑 Identity provider: {}", identity_url);

    // Initialize MongoDB connection
    let db = database::MongoDB::new(&database_url)
        .await
        .expect("Failed to connect to MongoDB");

    // Identity provider client (signup only)
    let identity = IdentityClient::new(&identity_url, &identity_key)
        .expect("Failed to build identity provider client");

    let db_data = web::Data::new(db.clone());
    let identity_data = web::Data::new(identity.clone());

    log::info!("✅ MongoDB connected successfully");
    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);
    log::info!("📄 OpenAPI spec at: http://{}:{}/api-docs/openapi.json", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:3000") // Frontend Web
            .allowed_origin("http://127.0.0.1:3000")
            .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .allowed_header("user_id") // caller identity on listing deletion
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(db_data.clone())
            .app_data(identity_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            // Health check
            .route("/health", web::get().to(api::health::health_check))
            // Signup
            .route("/signup", web::post().to(api::auth::signup))
            // Research listings CRUD
            .service(
                web::scope("/listings")
                    .route("", web::post().to(api::listings::create_listing))
                    .route("", web::get().to(api::listings::get_all_listings))
                    .route("/{listing_id}", web::get().to(api::listings::get_listing))
                    .route("/{listing_id}", web::patch().to(api::listings::update_listing))
                    .route("/{listing_id}", web::delete().to(api::listings::delete_listing)),
            )
            // Applications
            .service(
                web::scope("/applications")
                    .route("", web::post().to(api::applications::submit_application))
                    .route(
                        "/student/{student_id}",
                        web::get().to(api::applications::get_student_applications),
                    )
                    // {listing_id} is a catch-all; must stay after /student
                    .route(
                        "/{listing_id}",
                        web::get().to(api::applications::get_applications_for_listing),
                    )
                    .route(
                        "/{application_id}",
                        web::delete().to(api::applications::delete_application),
                    ),
            )
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}

mod config;
mod errors;

use actix_web::{middleware, web, App, HttpResponse, HttpServer};
use blob_store::blob_id::BlobId;
use blob_store::local_store::LocalFileBlobStore;
use blob_store::store::BlobStore;

use crate::config::Config;
use crate::errors::ApiError;

struct AppState {
    store: LocalFileBlobStore,
}

async fn upload_blob(
    shared_state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let id = shared_state.store.create(&body)?;
    Ok(HttpResponse::Ok().body(id.to_string()))
}

async fn fetch_blob(
    shared_state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_blob_id(&id)?;
    let data = shared_state.store.read(&id)?;
    Ok(HttpResponse::Ok().body(data))
}

async fn replace_blob(
    shared_state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let id = parse_blob_id(&id)?;
    shared_state.store.replace(&id, &body)?;
    Ok(HttpResponse::Ok().finish())
}

async fn delete_blob(
    shared_state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_blob_id(&id)?;
    shared_state.store.delete(&id)?;
    Ok(HttpResponse::Ok().finish())
}

// A malformed identifier is reported exactly like an absent one.
fn parse_blob_id(raw: &str) -> Result<BlobId, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound)
}

async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().finish()
}

// A failed method guard makes actix skip the resource entirely, so each
// resource carries its own 405 default instead of falling through to the
// global 404.
fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::post().to(upload_blob))
            .default_service(web::route().to(method_not_allowed)),
    )
    .service(
        web::resource("/{id:[a-z0-9\\-]+}")
            .route(web::get().to(fetch_blob))
            .route(web::put().to(replace_blob))
            .route(web::delete().to(delete_blob))
            .default_service(web::route().to(method_not_allowed)),
    );
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("invalid configuration: {}", err);
            std::process::exit(1);
        }
    };

    let store = LocalFileBlobStore::new(&config.file_root)?;
    let shared_state = web::Data::new(AppState { store });

    tracing::info!(
        "serving blobs from {:?} on 0.0.0.0:{}",
        config.file_root,
        config.listen_port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(shared_state.clone())
            .app_data(web::PayloadConfig::new(usize::MAX))
            .wrap(middleware::Logger::default())
            .configure(routes)
    })
    .bind(("0.0.0.0", config.listen_port))?
    .run()
    .await
}

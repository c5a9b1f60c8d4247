use actix_web::{web, HttpRequest, HttpResponse};
use crate::{
    database::MongoDB,
    models::{
        CreateListingRequest, ListingCreatedResponse, ListingResponse, MessageResponse,
        UpdateListingRequest,
    },
    services::listing_service,
};

#[utoipa::path(
    post,
    path = "/listings",
    tag = "Listings",
    request_body = CreateListingRequest,
    responses(
        (status = 200, description = "Research listing created", body = ListingCreatedResponse),
        (status = 400, description = "Store rejected the write")
    )
)]
pub async fn create_listing(
    db: web::Data<MongoDB>,
    request: web::Json<CreateListingRequest>,
) -> HttpResponse {
    log::info!("📝 POST /listings - title: {}", request.title);

    match listing_service::create_listing(&db, request.into_inner()).await {
        Ok(listing_id) => HttpResponse::Ok().json(ListingCreatedResponse {
            message: "Research listing created".to_string(),
            listing_id,
        }),
        Err(e) => {
            log::error!("❌ Error creating listing: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/listings",
    tag = "Listings",
    responses(
        (status = 200, description = "All listings, store order", body = [ListingResponse]),
        (status = 400, description = "Store read failed")
    )
)]
pub async fn get_all_listings(db: web::Data<MongoDB>) -> HttpResponse {
    log::info!("📋 GET /listings");

    match listing_service::get_all_listings(&db).await {
        Ok(listings) => {
            log::info!("✅ Retrieved {} listings", listings.len());
            HttpResponse::Ok().json(listings)
        }
        Err(e) => {
            log::error!("❌ Error listing listings: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/listings/{listing_id}",
    tag = "Listings",
    params(("listing_id" = String, Path, description = "Listing identifier")),
    responses(
        (status = 200, description = "Listing found", body = ListingResponse),
        (status = 404, description = "Listing not found")
    )
)]
pub async fn get_listing(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let listing_id = path.into_inner();

    match listing_service::get_listing(&db, &listing_id).await {
        Ok(listing) => HttpResponse::Ok().json(listing),
        Err(e) => e.error_response(),
    }
}

#[utoipa::path(
    patch,
    path = "/listings/{listing_id}",
    tag = "Listings",
    params(("listing_id" = String, Path, description = "Listing identifier")),
    request_body = UpdateListingRequest,
    responses(
        (status = 200, description = "Listing updated", body = MessageResponse),
        (status = 400, description = "No valid fields provided for update"),
        (status = 404, description = "Listing not found")
    )
)]
pub async fn update_listing(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
    request: web::Json<UpdateListingRequest>,
) -> HttpResponse {
    let listing_id = path.into_inner();
    log::info!("🔧 PATCH /listings/{}", listing_id);

    match listing_service::update_listing(&db, &listing_id, &request).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse {
            message: "Listing updated successfully".to_string(),
        }),
        Err(e) => {
            log::warn!("⚠️ Failed to update listing {}: {}", listing_id, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/listings/{listing_id}",
    tag = "Listings",
    params(
        ("listing_id" = String, Path, description = "Listing identifier"),
        ("user_id" = String, Header, description = "Caller identity; must resolve to a professor")
    ),
    responses(
        (status = 200, description = "Listing deleted", body = MessageResponse),
        (status = 401, description = "User ID missing in request headers"),
        (status = 403, description = "Caller is not a professor"),
        (status = 404, description = "Caller or listing not found")
    )
)]
pub async fn delete_listing(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
    req: HttpRequest,
) -> HttpResponse {
    let listing_id = path.into_inner();

    // Caller identity travels in the `user_id` header, literal underscore name.
    // An empty value counts as missing.
    let caller_user_id = req
        .headers()
        .get("user_id")
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty());

    log::info!("🗑️  DELETE /listings/{}", listing_id);

    match listing_service::delete_listing(&db, &listing_id, caller_user_id).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse {
            message: "Listing deleted successfully".to_string(),
        }),
        Err(e) => {
            log::warn!("⚠️ Failed to delete listing {}: {}", listing_id, e);
            e.error_response()
        }
    }
}

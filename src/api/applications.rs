use actix_web::{web, HttpResponse};
use crate::{
    database::MongoDB,
    models::{ApplicationCreatedResponse, ApplicationRequest, ApplicationResponse, MessageResponse},
    services::application_service,
};

#[utoipa::path(
    post,
    path = "/applications",
    tag = "Applications",
    request_body = ApplicationRequest,
    responses(
        (status = 200, description = "Application submitted", body = ApplicationCreatedResponse),
        (status = 400, description = "Store rejected the write")
    )
)]
pub async fn submit_application(
    db: web::Data<MongoDB>,
    request: web::Json<ApplicationRequest>,
) -> HttpResponse {
    log::info!(
        "📝 POST /applications - student {} -> listing {}",
        request.student_id,
        request.listing_id
    );

    match application_service::submit_application(&db, request.into_inner()).await {
        Ok(application_id) => HttpResponse::Ok().json(ApplicationCreatedResponse {
            message: "Application submitted successfully".to_string(),
            application_id,
        }),
        Err(e) => {
            log::error!("❌ Error submitting application: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/applications/{listing_id}",
    tag = "Applications",
    params(("listing_id" = String, Path, description = "Listing identifier")),
    responses(
        (status = 200, description = "Applications for the listing", body = [ApplicationResponse]),
        (status = 400, description = "Store read failed")
    )
)]
pub async fn get_applications_for_listing(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
) -> HttpResponse {
    let listing_id = path.into_inner();
    log::info!("📋 GET /applications/{}", listing_id);

    match application_service::get_applications_for_listing(&db, &listing_id).await {
        Ok(applications) => {
            log::info!(
                "✅ {} applications for listing {}",
                applications.len(),
                listing_id
            );
            HttpResponse::Ok().json(applications)
        }
        Err(e) => {
            log::error!("❌ Error listing applications: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/applications/student/{student_id}",
    tag = "Applications",
    params(("student_id" = String, Path, description = "Student identifier")),
    responses(
        (status = 200, description = "Applications by the student", body = [ApplicationResponse]),
        (status = 400, description = "Store read failed")
    )
)]
pub async fn get_student_applications(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
) -> HttpResponse {
    let student_id = path.into_inner();
    log::info!("📋 GET /applications/student/{}", student_id);

    match application_service::get_student_applications(&db, &student_id).await {
        Ok(applications) => {
            log::info!(
                "✅ {} applications by student {}",
                applications.len(),
                student_id
            );
            HttpResponse::Ok().json(applications)
        }
        Err(e) => {
            log::error!("❌ Error listing student applications: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/applications/{application_id}",
    tag = "Applications",
    params(("application_id" = String, Path, description = "Application identifier")),
    responses(
        (status = 200, description = "Application deleted", body = MessageResponse),
        (status = 404, description = "Application not found")
    )
)]
pub async fn delete_application(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let application_id = path.into_inner();
    log::info!("🗑️  DELETE /applications/{}", application_id);

    match application_service::delete_application(&db, &application_id).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse {
            message: "Application deleted successfully".to_string(),
        }),
        Err(e) => {
            log::warn!("⚠️ Failed to delete application {}: {}", application_id, e);
            e.error_response()
        }
    }
}

use actix_web::{web, HttpResponse};
use crate::{
    database::MongoDB,
    models::{SignupRequest, SignupResponse},
    services::{auth_service, identity_service::IdentityClient},
};

#[utoipa::path(
    post,
    path = "/signup",
    tag = "Auth",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Account and profile created", body = SignupResponse),
        (status = 400, description = "Identity provider or store rejected the request")
    )
)]
pub async fn signup(
    db: web::Data<MongoDB>,
    identity: web::Data<IdentityClient>,
    request: web::Json<SignupRequest>,
) -> HttpResponse {
    log::info!("📝 POST /signup - email: {}", request.email);

    match auth_service::register_user(&db, &identity, &request).await {
        Ok(uid) => HttpResponse::Ok().json(SignupResponse {
            message: "User registered successfully".to_string(),
            uid,
        }),
        Err(e) => {
            log::warn!("❌ Signup failed: {} - {}", request.email, e);
            e.error_response()
        }
    }
}

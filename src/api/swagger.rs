use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Research Match Service API",
        version = "1.0.0",
        description = "Backend for a research-matching platform connecting students and professors.\n\n**Features:**\n- Account registration via the external identity provider\n- Research listing CRUD with professor-gated deletion\n- Student applications to listings\n- Health monitoring",
        contact(
            name = "Research Match Team",
            email = "support@research-match.edu"
        )
    ),
    paths(
        // Auth
        crate::api::auth::signup,

        // Listings
        crate::api::listings::create_listing,
        crate::api::listings::get_all_listings,
        crate::api::listings::get_listing,
        crate::api::listings::update_listing,
        crate::api::listings::delete_listing,

        // Applications
        crate::api::applications::submit_application,
        crate::api::applications::get_applications_for_listing,
        crate::api::applications::get_student_applications,
        crate::api::applications::delete_application,

        // Health
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::models::SignupRequest,
            crate::models::SignupResponse,
            crate::models::CreateListingRequest,
            crate::models::UpdateListingRequest,
            crate::models::ListingResponse,
            crate::models::ListingCreatedResponse,
            crate::models::ApplicationRequest,
            crate::models::ApplicationResponse,
            crate::models::ApplicationCreatedResponse,
            crate::models::MessageResponse,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Auth", description = "Account registration. Credentials are handled by the external identity provider; only the returned uid is stored."),
        (name = "Listings", description = "Research opportunity listings. Deletion requires the caller (via the `user_id` header) to resolve to a professor."),
        (name = "Applications", description = "Student applications to listings, queryable by listing or by student."),
        (name = "Health", description = "Health check endpoint for monitoring service status."),
    )
)]
pub struct ApiDoc;

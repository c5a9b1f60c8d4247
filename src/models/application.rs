use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Application submitted by a student (stored in `applications`).
///
/// `student_id` and `listing_id` are loose references; neither is checked for
/// existence, and the same student may apply to the same listing repeatedly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchApplication {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub student_id: String,
    pub listing_id: String,
    pub student_name: String,
    pub student_email: String,
    pub statement_of_purpose: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ApplicationRequest {
    pub student_id: String,
    pub listing_id: String,
    pub student_name: String,
    pub student_email: String,
    pub statement_of_purpose: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ApplicationResponse {
    pub id: String,
    pub student_id: String,
    pub listing_id: String,
    pub student_name: String,
    pub student_email: String,
    pub statement_of_purpose: String,
}

impl From<ResearchApplication> for ApplicationResponse {
    fn from(application: ResearchApplication) -> Self {
        ApplicationResponse {
            id: application.id.map(|id| id.to_hex()).unwrap_or_default(),
            student_id: application.student_id,
            listing_id: application.listing_id,
            student_name: application.student_name,
            student_email: application.student_email,
            statement_of_purpose: application.statement_of_purpose,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ApplicationCreatedResponse {
    pub message: String,
    pub application_id: String,
}

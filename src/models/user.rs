use serde::{Deserialize, Serialize};

/// Profile document stored in `users`.
///
/// `user_id` is the PRIMARY IDENTIFIER — the uid returned by the identity
/// provider at signup, not the store-generated `_id`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<mongodb::bson::oid::ObjectId>,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: String, // "student" or "professor" by convention; not validated
    #[serde(default)]
    pub research_interests: Vec<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub research_interests: Vec<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SignupResponse {
    pub message: String,
    pub uid: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_interests_default_empty() {
        let request: SignupRequest = serde_json::from_str(
            r#"{"email":"a@b.edu","password":"secret","name":"Ana","role":"student"}"#,
        )
        .unwrap();
        assert!(request.research_interests.is_empty());
    }

    #[test]
    fn test_user_document_omits_unset_object_id() {
        let user = User {
            id: None,
            user_id: "uid-1".into(),
            name: "Ana".into(),
            email: "a@b.edu".into(),
            role: "student".into(),
            research_interests: vec!["ml".into()],
        };
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("_id").is_none());
        assert_eq!(value["user_id"], "uid-1");
    }
}

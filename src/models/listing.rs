use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Research opportunity posted by a professor (stored in `research_listings`).
///
/// `professor_id` is a loose reference to `users.user_id` — it is not checked
/// for existence or role on creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchListing {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub description: String,
    pub professor_id: String,
    pub eligibility: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateListingRequest {
    pub title: String,
    pub description: String,
    pub professor_id: String,
    pub eligibility: Vec<String>,
    pub tags: Vec<String>,
}

/// Partial update: a field left out or set to null is not touched.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateListingRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub professor_id: Option<String>,
    pub eligibility: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ListingResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub professor_id: String,
    pub eligibility: Vec<String>,
    pub tags: Vec<String>,
}

impl From<ResearchListing> for ListingResponse {
    fn from(listing: ResearchListing) -> Self {
        ListingResponse {
            id: listing.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: listing.title,
            description: listing.description,
            professor_id: listing.professor_id,
            eligibility: listing.eligibility,
            tags: listing.tags,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ListingCreatedResponse {
    pub message: String,
    pub listing_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_null_and_missing_are_equivalent() {
        let explicit_null: UpdateListingRequest =
            serde_json::from_str(r#"{"title":null,"tags":["ml"]}"#).unwrap();
        let missing: UpdateListingRequest = serde_json::from_str(r#"{"tags":["ml"]}"#).unwrap();

        assert!(explicit_null.title.is_none());
        assert!(missing.title.is_none());
        assert_eq!(explicit_null.tags.as_deref(), Some(&["ml".to_string()][..]));
    }

    #[test]
    fn test_update_request_empty_list_is_a_value() {
        let request: UpdateListingRequest = serde_json::from_str(r#"{"eligibility":[]}"#).unwrap();
        assert_eq!(request.eligibility, Some(vec![]));
    }

    #[test]
    fn test_listing_response_hex_encodes_id() {
        let object_id = ObjectId::new();
        let listing = ResearchListing {
            id: Some(object_id),
            title: "AI Research".into(),
            description: "LLM evaluation".into(),
            professor_id: "p1".into(),
            eligibility: vec!["senior".into()],
            tags: vec!["ml".into()],
        };

        let response = ListingResponse::from(listing);
        assert_eq!(response.id, object_id.to_hex());
        assert_eq!(response.title, "AI Research");
    }
}

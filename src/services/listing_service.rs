use crate::database::MongoDB;
use crate::models::{
    CreateListingRequest, ListingResponse, ResearchListing, UpdateListingRequest, User,
};
use crate::utils::error::AppError;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};

const LISTINGS: &str = "research_listings";
const USERS: &str = "users";

pub async fn create_listing(
    db: &MongoDB,
    request: CreateListingRequest,
) -> Result<String, AppError> {
    let collection = db.collection::<ResearchListing>(LISTINGS);

    let listing = ResearchListing {
        id: None,
        title: request.title,
        description: request.description,
        professor_id: request.professor_id,
        eligibility: request.eligibility,
        tags: request.tags,
    };

    let result = collection
        .insert_one(&listing)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    let listing_id = result
        .inserted_id
        .as_object_id()
        .ok_or_else(|| AppError::DatabaseError("Insert returned no ObjectId".to_string()))?
        .to_hex();

    log::info!("✅ Listing created: {}", listing_id);

    Ok(listing_id)
}

/// Returns every listing in store order; no sort key is applied.
pub async fn get_all_listings(db: &MongoDB) -> Result<Vec<ListingResponse>, AppError> {
    let collection = db.collection::<ResearchListing>(LISTINGS);

    let mut cursor = collection
        .find(doc! {})
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    let mut listings = Vec::new();
    while let Some(listing) = cursor
        .try_next()
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
    {
        listings.push(ListingResponse::from(listing));
    }

    Ok(listings)
}

pub async fn get_listing(db: &MongoDB, listing_id: &str) -> Result<ListingResponse, AppError> {
    let object_id = parse_listing_id(listing_id)?;
    let collection = db.collection::<ResearchListing>(LISTINGS);

    let listing = collection
        .find_one(doc! { "_id": object_id })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("Listing not found".to_string()))?;

    Ok(ListingResponse::from(listing))
}

/// Merge-update: applies exactly the non-null fields of the request and leaves
/// every other field untouched.
pub async fn update_listing(
    db: &MongoDB,
    listing_id: &str,
    request: &UpdateListingRequest,
) -> Result<(), AppError> {
    let object_id = parse_listing_id(listing_id)?;
    let collection = db.collection::<ResearchListing>(LISTINGS);

    let exists = collection
        .find_one(doc! { "_id": object_id })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .is_some();
    if !exists {
        return Err(AppError::NotFound("Listing not found".to_string()));
    }

    let update_doc = update_document(request);
    if update_doc.is_empty() {
        return Err(AppError::InvalidRequest(
            "No valid fields provided for update".to_string(),
        ));
    }

    let field_count = update_doc.len();
    collection
        .update_one(doc! { "_id": object_id }, doc! { "$set": update_doc })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    log::info!("✅ Listing updated: {} ({} fields)", listing_id, field_count);

    Ok(())
}

/// Authorization chain: caller header present, caller resolves to a user, user
/// role is "professor", listing exists. Ownership of the listing is not
/// checked — any professor may delete any listing.
pub async fn delete_listing(
    db: &MongoDB,
    listing_id: &str,
    caller_user_id: Option<&str>,
) -> Result<(), AppError> {
    let user_id = caller_user_id.ok_or_else(|| {
        AppError::Unauthorized("User ID missing in request headers".to_string())
    })?;

    let user = db
        .collection::<User>(USERS)
        .find_one(doc! { "user_id": user_id })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    if user.role != "professor" {
        return Err(AppError::Forbidden(
            "Only professors can delete listings".to_string(),
        ));
    }

    let object_id = parse_listing_id(listing_id)?;
    let result = db
        .collection::<ResearchListing>(LISTINGS)
        .delete_one(doc! { "_id": object_id })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    if result.deleted_count == 0 {
        return Err(AppError::NotFound("Listing not found".to_string()));
    }

    log::info!("🗑️  Listing deleted: {} (by {})", listing_id, user_id);

    Ok(())
}

/// An id that does not parse as an ObjectId cannot name a stored listing.
fn parse_listing_id(listing_id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(listing_id)
        .map_err(|_| AppError::NotFound("Listing not found".to_string()))
}

/// Keeps only the fields the caller supplied with non-null values. An explicit
/// null is dropped; an explicit empty list or empty string is kept.
fn update_document(request: &UpdateListingRequest) -> Document {
    let mut update_doc = Document::new();

    if let Some(title) = &request.title {
        update_doc.insert("title", title);
    }
    if let Some(description) = &request.description {
        update_doc.insert("description", description);
    }
    if let Some(professor_id) = &request.professor_id {
        update_doc.insert("professor_id", professor_id);
    }
    if let Some(eligibility) = &request.eligibility {
        update_doc.insert("eligibility", eligibility.clone());
    }
    if let Some(tags) = &request.tags {
        update_doc.insert("tags", tags.clone());
    }

    update_doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn update_request(json: &str) -> UpdateListingRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_update_document_drops_nulls() {
        let request = update_request(r#"{"title":"New title","description":null}"#);
        let update_doc = update_document(&request);

        assert_eq!(update_doc.len(), 1);
        assert_eq!(update_doc.get_str("title").unwrap(), "New title");
        assert!(!update_doc.contains_key("description"));
    }

    #[test]
    fn test_update_document_empty_body_yields_empty_doc() {
        let request = update_request("{}");
        assert!(update_document(&request).is_empty());

        let all_null = update_request(
            r#"{"title":null,"description":null,"professor_id":null,"eligibility":null,"tags":null}"#,
        );
        assert!(update_document(&all_null).is_empty());
    }

    #[test]
    fn test_update_document_keeps_empty_list() {
        let request = update_request(r#"{"tags":[]}"#);
        let update_doc = update_document(&request);

        assert_eq!(update_doc.len(), 1);
        assert!(update_doc.get_array("tags").unwrap().is_empty());
    }

    #[test]
    fn test_parse_listing_id_rejects_garbage_as_not_found() {
        let err = parse_listing_id("definitely-not-an-object-id").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    // ==================== MongoDB integration tests ====================

    async fn test_db() -> MongoDB {
        dotenv::dotenv().ok();
        let uri = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/research_match_test".to_string());
        MongoDB::new(&uri).await.expect("MongoDB must be running")
    }

    fn sample_listing_request(professor_id: &str) -> CreateListingRequest {
        CreateListingRequest {
            title: "AI Research".into(),
            description: "LLM evaluation".into(),
            professor_id: professor_id.into(),
            eligibility: vec!["senior".into()],
            tags: vec!["ml".into()],
        }
    }

    async fn seed_user(db: &MongoDB, role: &str) -> String {
        let user_id = uuid::Uuid::new_v4().to_string();
        db.collection::<User>(USERS)
            .insert_one(&User {
                id: None,
                user_id: user_id.clone(),
                name: "Test".into(),
                email: format!("{}@example.edu", user_id),
                role: role.into(),
                research_interests: vec![],
            })
            .await
            .unwrap();
        user_id
    }

    async fn remove_user(db: &MongoDB, user_id: &str) {
        db.collection::<User>(USERS)
            .delete_one(doc! { "user_id": user_id })
            .await
            .unwrap();
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_listing_create_then_get_roundtrip() {
        let db = test_db().await;

        let listing_id = create_listing(&db, sample_listing_request("p1"))
            .await
            .unwrap();

        let listing = get_listing(&db, &listing_id).await.unwrap();
        assert_eq!(listing.id, listing_id);
        assert_eq!(listing.title, "AI Research");
        assert_eq!(listing.professor_id, "p1");

        db.collection::<ResearchListing>(LISTINGS)
            .delete_one(doc! { "_id": ObjectId::parse_str(&listing_id).unwrap() })
            .await
            .unwrap();
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_update_touches_only_supplied_fields() {
        let db = test_db().await;

        let listing_id = create_listing(&db, sample_listing_request("p1"))
            .await
            .unwrap();

        let request = update_request(r#"{"title":"Updated title","description":null}"#);
        update_listing(&db, &listing_id, &request).await.unwrap();

        let listing = get_listing(&db, &listing_id).await.unwrap();
        assert_eq!(listing.title, "Updated title");
        // Fields absent from the request keep their prior values
        assert_eq!(listing.description, "LLM evaluation");
        assert_eq!(listing.tags, vec!["ml".to_string()]);

        let empty = update_request(r#"{"title":null}"#);
        let err = update_listing(&db, &listing_id, &empty).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(_)));

        db.collection::<ResearchListing>(LISTINGS)
            .delete_one(doc! { "_id": ObjectId::parse_str(&listing_id).unwrap() })
            .await
            .unwrap();
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_update_missing_listing_is_not_found() {
        let db = test_db().await;

        let request = update_request(r#"{"title":"x"}"#);
        let err = update_listing(&db, &ObjectId::new().to_hex(), &request)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_delete_listing_authorization_chain() {
        let db = test_db().await;

        let professor_id = seed_user(&db, "professor").await;
        let student_id = seed_user(&db, "student").await;
        let listing_id = create_listing(&db, sample_listing_request(&professor_id))
            .await
            .unwrap();

        // Missing caller header
        let err = delete_listing(&db, &listing_id, None).await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));

        // Caller does not resolve to a user
        let err = delete_listing(&db, &listing_id, Some("no-such-user"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        // Caller is not a professor
        let err = delete_listing(&db, &listing_id, Some(&student_id))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));

        // Listing does not exist
        let err = delete_listing(&db, &ObjectId::new().to_hex(), Some(&professor_id))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        // All conjuncts hold
        delete_listing(&db, &listing_id, Some(&professor_id))
            .await
            .unwrap();
        let err = get_listing(&db, &listing_id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        remove_user(&db, &professor_id).await;
        remove_user(&db, &student_id).await;
    }
}

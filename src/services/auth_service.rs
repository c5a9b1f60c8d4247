use crate::database::MongoDB;
use crate::models::{SignupRequest, User};
use crate::services::identity_service::IdentityClient;
use crate::utils::error::AppError;

/// Creates the identity-provider account, then the profile document keyed by
/// the returned uid. If the profile write fails the account is left orphaned;
/// there is no compensating cleanup.
pub async fn register_user(
    db: &MongoDB,
    identity: &IdentityClient,
    request: &SignupRequest,
) -> Result<String, AppError> {
    let uid = identity
        .create_account(&request.email, &request.password)
        .await?;

    let user = User {
        id: None,
        user_id: uid.clone(),
        name: request.name.clone(),
        email: request.email.clone(),
        role: request.role.clone(),
        research_interests: request.research_interests.clone(),
    };

    db.collection::<User>("users")
        .insert_one(&user)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    log::info!("✅ User registered: {} (uid: {})", request.email, uid);

    Ok(uid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;
    use std::env;

    async fn test_db() -> MongoDB {
        dotenv::dotenv().ok();
        let uri = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/research_match_test".to_string());
        MongoDB::new(&uri).await.expect("MongoDB must be running")
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_profile_document_is_keyed_by_uid() {
        let db = test_db().await;
        let uid = uuid::Uuid::new_v4().to_string();

        // Write the profile document directly, as register_user does after the
        // identity call, and read it back through the same caller-lookup path
        // used by listing deletion.
        let user = User {
            id: None,
            user_id: uid.clone(),
            name: "Ana".into(),
            email: format!("{}@example.edu", uid),
            role: "student".into(),
            research_interests: vec!["ml".into()],
        };
        db.collection::<User>("users")
            .insert_one(&user)
            .await
            .unwrap();

        let found = db
            .collection::<User>("users")
            .find_one(doc! { "user_id": &uid })
            .await
            .unwrap()
            .expect("profile document must exist");
        assert_eq!(found.user_id, uid);
        assert_eq!(found.role, "student");

        db.collection::<User>("users")
            .delete_one(doc! { "user_id": &uid })
            .await
            .unwrap();
    }
}

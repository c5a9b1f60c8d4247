use crate::database::MongoDB;
use crate::models::{ApplicationRequest, ApplicationResponse, ResearchApplication};
use crate::utils::error::AppError;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};

const APPLICATIONS: &str = "applications";

pub async fn submit_application(
    db: &MongoDB,
    request: ApplicationRequest,
) -> Result<String, AppError> {
    let collection = db.collection::<ResearchApplication>(APPLICATIONS);

    let application = ResearchApplication {
        id: None,
        student_id: request.student_id,
        listing_id: request.listing_id,
        student_name: request.student_name,
        student_email: request.student_email,
        statement_of_purpose: request.statement_of_purpose,
    };

    let result = collection
        .insert_one(&application)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    let application_id = result
        .inserted_id
        .as_object_id()
        .ok_or_else(|| AppError::DatabaseError("Insert returned no ObjectId".to_string()))?
        .to_hex();

    log::info!(
        "✅ Application submitted: {} (student {} -> listing {})",
        application_id,
        application.student_id,
        application.listing_id
    );

    Ok(application_id)
}

pub async fn get_applications_for_listing(
    db: &MongoDB,
    listing_id: &str,
) -> Result<Vec<ApplicationResponse>, AppError> {
    find_applications(db, doc! { "listing_id": listing_id }).await
}

pub async fn get_student_applications(
    db: &MongoDB,
    student_id: &str,
) -> Result<Vec<ApplicationResponse>, AppError> {
    find_applications(db, doc! { "student_id": student_id }).await
}

/// No authorization check here — unlike listing deletion, any caller may
/// delete any application by id.
pub async fn delete_application(db: &MongoDB, application_id: &str) -> Result<(), AppError> {
    let object_id = ObjectId::parse_str(application_id)
        .map_err(|_| AppError::NotFound("Application not found".to_string()))?;

    let result = db
        .collection::<ResearchApplication>(APPLICATIONS)
        .delete_one(doc! { "_id": object_id })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    if result.deleted_count == 0 {
        return Err(AppError::NotFound("Application not found".to_string()));
    }

    log::info!("🗑️  Application deleted: {}", application_id);

    Ok(())
}

async fn find_applications(
    db: &MongoDB,
    filter: Document,
) -> Result<Vec<ApplicationResponse>, AppError> {
    let collection = db.collection::<ResearchApplication>(APPLICATIONS);

    let mut cursor = collection
        .find(filter)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    let mut applications = Vec::new();
    while let Some(application) = cursor
        .try_next()
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
    {
        applications.push(ApplicationResponse::from(application));
    }

    Ok(applications)
}

use mongodb::{Client, Collection, Database};
use std::error::Error;

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        // Bounded timeouts; store calls must never hang a request indefinitely
        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;

        // Extract database name from URI or use default
        let db_name = uri
            .split('/')
            .last()
            .and_then(|s| s.split('?').next())
            .filter(|s| !s.is_empty())
            .unwrap_or("ResearchMatch");

        let db = client.database(db_name);

        // Test connection
        db.list_collection_names().await?;

        let mongodb = Self { client, db };

        mongodb.ensure_indexes().await?;

        Ok(mongodb)
    }

    /// Creates the indexes backing the equality filters the API issues.
    async fn ensure_indexes(&self) -> Result<(), Box<dyn Error>> {
        use mongodb::bson::doc;
        use mongodb::IndexModel;

        log::info!("🔧 Creating database indexes...");

        // users(user_id) - caller lookup on listing deletion
        let users = self.database().collection::<mongodb::bson::Document>("users");

        let users_index = IndexModel::builder().keys(doc! { "user_id": 1 }).build();

        match users.create_index(users_index).await {
            Ok(_) => log::info!("   ✅ Index created: users(user_id)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        // applications(listing_id) - applications for a listing
        let applications = self
            .database()
            .collection::<mongodb::bson::Document>("applications");

        let listing_index = IndexModel::builder().keys(doc! { "listing_id": 1 }).build();

        match applications.create_index(listing_index).await {
            Ok(_) => log::info!("   ✅ Index created: applications(listing_id)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        // applications(student_id) - applications by a student
        let student_index = IndexModel::builder().keys(doc! { "student_id": 1 }).build();

        match applications.create_index(student_index).await {
            Ok(_) => log::info!("   ✅ Index created: applications(student_id)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        log::info!("✅ Database indexes ready");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_mongodb_connection() {
        dotenv::dotenv().ok();

        let uri = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/research_match_test".to_string());

        let db = MongoDB::new(&uri).await;
        assert!(db.is_ok());
    }
}

use async_trait::async_trait;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::AppResult,
    application::use_cases::waitlist::WaitlistRepo,
    domain::entities::waitlist_entry::WaitlistEntry,
};

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>> {
        let rec = sqlx::query_as::<_, WaitlistEntry>(
            r#"SELECT id, email, created_at FROM waitlist WHERE email = $1"#,
        )
        .bind(email)
        .fetch_optional(self.pool())
        .await?;

        Ok(rec)
    }

    async fn insert_if_absent(&self, email: &str) -> AppResult<Option<WaitlistEntry>> {
        // A concurrent insert of the same email yields no row instead of an error.
        let rec = sqlx::query_as::<_, WaitlistEntry>(
            r#"INSERT INTO waitlist (email)
               VALUES ($1)
               ON CONFLICT (email) DO NOTHING
               RETURNING id, email, created_at"#,
        )
        .bind(email)
        .fetch_optional(self.pool())
        .await?;

        Ok(rec)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(self.pool()).await?;
        Ok(())
    }
}

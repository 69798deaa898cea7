use attendance_result::Result;
use iso8601_timestamp::Timestamp;

use crate::Database;

auto_derived!(
    /// Code linked to a user, presented at events to check in
    pub struct Scancode {
        /// The code itself
        #[serde(rename = "_id")]
        pub id: String,
        /// Owning user
        pub user: String,
        /// Time at which the code was registered
        pub created_at: Timestamp,
    }
);

impl Scancode {
    /// Register a new scancode for a user
    pub async fn create(db: &Database, user_id: &str, code: String) -> Result<Scancode> {
        let scancode = Scancode {
            id: code,
            user: user_id.to_string(),
            created_at: Timestamp::now_utc(),
        };

        db.insert_scancode(&scancode).await?;
        Ok(scancode)
    }

    /// Delete a scancode on behalf of a requester
    ///
    /// Only the owner or a privileged requester may delete a code.
    pub async fn delete(
        db: &Database,
        code: &str,
        requester_id: &str,
        is_privileged: bool,
    ) -> Result<Scancode> {
        let scancode = db.fetch_scancode(code).await?;
        if scancode.user != requester_id && !is_privileged {
            return Err(create_error!(NotOwner));
        }

        db.delete_scancode(code).await?;
        Ok(scancode)
    }
}

#[cfg(test)]
mod tests {
    use attendance_result::ErrorType;

    use crate::Scancode;

    #[tokio::test]
    async fn codes_are_globally_unique() {
        database_test!(|db| async move {
            Scancode::create(&db, "alice", "SHARED".to_string())
                .await
                .unwrap();

            let error = Scancode::create(&db, "bob", "SHARED".to_string())
                .await
                .unwrap_err();
            assert_eq!(error.error_type, ErrorType::ScancodeTaken);

            let codes = db.fetch_user_scancodes("alice").await.unwrap();
            assert_eq!(codes.len(), 1);
            assert!(db.fetch_user_scancodes("bob").await.unwrap().is_empty());
        });
    }

    #[tokio::test]
    async fn only_owner_or_privileged_may_delete() {
        database_test!(|db| async move {
            Scancode::create(&db, "alice", "ALICE-1".to_string())
                .await
                .unwrap();

            let error = Scancode::delete(&db, "ALICE-1", "bob", false)
                .await
                .unwrap_err();
            assert_eq!(error.error_type, ErrorType::NotOwner);
            assert!(db.fetch_scancode("ALICE-1").await.is_ok());

            let deleted = Scancode::delete(&db, "ALICE-1", "mentor", true)
                .await
                .unwrap();
            assert_eq!(deleted.user, "alice");
            assert!(db.fetch_scancode("ALICE-1").await.is_err());
        });
    }

    #[tokio::test]
    async fn deleting_unknown_code_is_not_found() {
        database_test!(|db| async move {
            let error = Scancode::delete(&db, "GHOST", "alice", false)
                .await
                .unwrap_err();
            assert_eq!(error.error_type, ErrorType::UnknownScancode);
        });
    }
}

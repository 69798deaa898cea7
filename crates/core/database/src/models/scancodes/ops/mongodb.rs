use attendance_result::Result;
use mongodb::options::FindOptions;

use crate::Scancode;
use crate::{is_duplicate_key, MongoDb};

use super::AbstractScancodes;

static COL: &str = "scancodes";

#[async_trait]
impl AbstractScancodes for MongoDb {
    /// Insert a new scancode, failing if the code is already registered
    async fn insert_scancode(&self, scancode: &Scancode) -> Result<()> {
        self.insert_one(COL, scancode)
            .await
            .map(|_| ())
            .map_err(|error| {
                if is_duplicate_key(&error) {
                    create_error!(ScancodeTaken)
                } else {
                    error!("insert_one on {COL} failed: {error}");
                    create_database_error!("insert_one", COL)
                }
            })
    }

    /// Fetch a scancode by its code
    async fn fetch_scancode(&self, code: &str) -> Result<Scancode> {
        query!(self, find_one_by_id, COL, code)?.ok_or_else(|| create_error!(UnknownScancode))
    }

    /// Fetch all scancodes of a user
    async fn fetch_user_scancodes(&self, user_id: &str) -> Result<Vec<Scancode>> {
        query!(
            self,
            find_with_options,
            COL,
            doc! {
                "user": user_id
            },
            FindOptions::builder()
                .sort(doc! {
                    "created_at": 1_i32
                })
                .build()
        )
    }

    /// Delete a scancode by its code
    async fn delete_scancode(&self, code: &str) -> Result<()> {
        let result = query!(self, delete_one_by_id, COL, code)?;
        if result.deleted_count == 0 {
            Err(create_error!(UnknownScancode))
        } else {
            Ok(())
        }
    }

    /// Delete all scancodes of a user
    async fn delete_user_scancodes(&self, user_id: &str) -> Result<()> {
        query!(
            self,
            delete_many,
            COL,
            doc! {
                "user": user_id
            }
        )
        .map(|_| ())
    }
}

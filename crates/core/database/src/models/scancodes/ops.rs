use attendance_result::Result;

use crate::Scancode;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractScancodes: Sync + Send {
    /// Insert a new scancode, failing if the code is already registered
    async fn insert_scancode(&self, scancode: &Scancode) -> Result<()>;

    /// Fetch a scancode by its code
    async fn fetch_scancode(&self, code: &str) -> Result<Scancode>;

    /// Fetch all scancodes of a user
    async fn fetch_user_scancodes(&self, user_id: &str) -> Result<Vec<Scancode>>;

    /// Delete a scancode by its code
    async fn delete_scancode(&self, code: &str) -> Result<()>;

    /// Delete all scancodes of a user
    async fn delete_user_scancodes(&self, user_id: &str) -> Result<()>;
}

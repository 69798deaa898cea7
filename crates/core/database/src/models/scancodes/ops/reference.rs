use attendance_result::Result;

use crate::ReferenceDb;
use crate::Scancode;

use super::AbstractScancodes;

#[async_trait]
impl AbstractScancodes for ReferenceDb {
    /// Insert a new scancode, failing if the code is already registered
    async fn insert_scancode(&self, scancode: &Scancode) -> Result<()> {
        let mut scancodes = self.scancodes.lock().await;
        if scancodes.contains_key(&scancode.id) {
            Err(create_error!(ScancodeTaken))
        } else {
            scancodes.insert(scancode.id.to_string(), scancode.clone());
            Ok(())
        }
    }

    /// Fetch a scancode by its code
    async fn fetch_scancode(&self, code: &str) -> Result<Scancode> {
        let scancodes = self.scancodes.lock().await;
        scancodes
            .get(code)
            .cloned()
            .ok_or_else(|| create_error!(UnknownScancode))
    }

    /// Fetch all scancodes of a user
    async fn fetch_user_scancodes(&self, user_id: &str) -> Result<Vec<Scancode>> {
        let scancodes = self.scancodes.lock().await;
        let mut scancodes: Vec<Scancode> = scancodes
            .values()
            .filter(|scancode| scancode.user == user_id)
            .cloned()
            .collect();

        scancodes.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(scancodes)
    }

    /// Delete a scancode by its code
    async fn delete_scancode(&self, code: &str) -> Result<()> {
        let mut scancodes = self.scancodes.lock().await;
        if scancodes.remove(code).is_some() {
            Ok(())
        } else {
            Err(create_error!(UnknownScancode))
        }
    }

    /// Delete all scancodes of a user
    async fn delete_user_scancodes(&self, user_id: &str) -> Result<()> {
        let mut scancodes = self.scancodes.lock().await;
        scancodes.retain(|_, scancode| scancode.user != user_id);
        Ok(())
    }
}

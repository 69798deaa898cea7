use attendance_result::Result;
use mongodb::options::FindOptions;

use crate::{FieldsUser, PartialUser, User};
use crate::{IntoDocumentPath, MongoDb};

use super::AbstractUsers;

static COL: &str = "users";

#[async_trait]
impl AbstractUsers for MongoDb {
    /// Insert a new user into the database
    async fn insert_user(&self, user: &User) -> Result<()> {
        query!(self, insert_one, COL, &user).map(|_| ())
    }

    /// Fetch a user from the database
    async fn fetch_user(&self, id: &str) -> Result<User> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(UnknownUser))
    }

    /// Fetch a user by their calendar secret
    async fn fetch_user_by_calendar_secret(&self, secret: &str) -> Result<User> {
        query!(
            self,
            find_one,
            COL,
            doc! {
                "calendar_secret": secret
            }
        )?
        .ok_or_else(|| create_error!(UnknownUser))
    }

    /// Fetch every user
    async fn fetch_users(&self) -> Result<Vec<User>> {
        query!(
            self,
            find_with_options,
            COL,
            doc! {},
            FindOptions::builder()
                .sort(doc! {
                    "username": 1_i32
                })
                .build()
        )
    }

    /// Update a user by their id given some data
    async fn update_user(
        &self,
        id: &str,
        partial: &PartialUser,
        remove: Vec<FieldsUser>,
    ) -> Result<()> {
        query!(
            self,
            update_one_by_id,
            COL,
            id,
            partial,
            remove.iter().map(|x| x as &dyn IntoDocumentPath).collect()
        )
        .map(|_| ())
    }

    /// Delete a user by their id
    async fn delete_user(&self, id: &str) -> Result<()> {
        let result = query!(self, delete_one_by_id, COL, id)?;
        if result.deleted_count == 0 {
            Err(create_error!(UnknownUser))
        } else {
            Ok(())
        }
    }
}

impl IntoDocumentPath for FieldsUser {
    fn as_path(&self) -> Option<&'static str> {
        Some(match self {
            FieldsUser::DefaultStatus => "default_status",
        })
    }
}

use crate::mongodb::bson::{doc, Document};
use crate::MongoDb;

use super::AbstractMigrations;

/// Indexes backing the lookups each collection serves
fn indexes() -> Vec<Document> {
    vec![
        doc! {
            "createIndexes": "events",
            "indexes": [
                {
                    "key": {
                        "start_date": 1_i32
                    },
                    "name": "start_date"
                },
                {
                    "key": {
                        "end_date": 1_i32
                    },
                    "name": "end_date"
                }
            ]
        },
        doc! {
            "createIndexes": "rsvps",
            "indexes": [
                {
                    "key": {
                        "_id.event": 1_i32,
                        "_id.user": 1_i32,
                    },
                    "name": "compound_id",
                    "unique": true
                },
                {
                    "key": {
                        "_id.user": 1_i32,
                    },
                    "name": "user_id"
                }
            ]
        },
        doc! {
            "createIndexes": "users",
            "indexes": [
                {
                    "key": {
                        "calendar_secret": 1_i32
                    },
                    "name": "calendar_secret",
                    "unique": true
                }
            ]
        },
        doc! {
            "createIndexes": "scancodes",
            "indexes": [
                {
                    "key": {
                        "user": 1_i32
                    },
                    "name": "user"
                }
            ]
        },
        doc! {
            "createIndexes": "sessions",
            "indexes": [
                {
                    "key": {
                        "token": 1_i32
                    },
                    "name": "token",
                    "unique": true
                },
                {
                    "key": {
                        "user_id": 1_i32
                    },
                    "name": "user_id"
                }
            ]
        },
    ]
}

/// Whether a `hello` reply comes from a replica set member or a mongos router
///
/// Standalone servers reject multi-document transactions.
fn supports_transactions(hello: &Document) -> bool {
    hello.get_str("setName").is_ok() || matches!(hello.get_str("msg"), Ok("isdbgrid"))
}

#[async_trait]
impl AbstractMigrations for MongoDb {
    #[cfg(test)]
    /// Drop the database
    async fn drop_database(&self) {
        self.db().drop().await.ok();
    }

    /// Migrate the database
    async fn migrate_database(&self) -> Result<(), ()> {
        info!("Migrating the database.");

        let db = self.db();
        match db.run_command(doc! { "hello": 1_i32 }).await {
            Ok(hello) if supports_transactions(&hello) => {}
            Ok(_) => {
                error!("MongoDB must run as a replica set or behind mongos, rsvp batches use transactions");
                return Err(());
            }
            Err(error) => {
                error!("Failed to reach the database: {error}");
                return Err(());
            }
        }

        for command in indexes() {
            if let Err(error) = db.run_command(command).await {
                error!("Failed to create indexes: {error}");
                return Err(());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::mongodb::bson::doc;

    use super::supports_transactions;

    #[test]
    fn standalone_servers_are_rejected() {
        assert!(!supports_transactions(
            &doc! { "isWritablePrimary": true, "maxWireVersion": 21_i32, "ok": 1.0 }
        ));
    }

    #[test]
    fn replica_sets_and_routers_are_accepted() {
        assert!(supports_transactions(
            &doc! { "isWritablePrimary": true, "setName": "rs0", "ok": 1.0 }
        ));
        assert!(supports_transactions(
            &doc! { "isWritablePrimary": true, "msg": "isdbgrid", "ok": 1.0 }
        ));
    }
}

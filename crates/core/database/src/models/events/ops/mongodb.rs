use attendance_result::Result;
use bson::{to_bson, Bson};
use iso8601_timestamp::Timestamp;
use mongodb::options::FindOptions;

use crate::{Event, FieldsEvent, PartialEvent};
use crate::{IntoDocumentPath, MongoDb};

use super::AbstractEvents;

static COL: &str = "events";

fn timestamp_bson(timestamp: &Timestamp) -> Result<Bson> {
    to_bson(timestamp).map_err(|_| create_database_error!("serialize", COL))
}

#[async_trait]
impl AbstractEvents for MongoDb {
    /// Insert a new event into the database
    async fn insert_event(&self, event: &Event) -> Result<()> {
        query!(self, insert_one, COL, &event).map(|_| ())
    }

    /// Fetch an event by its id
    async fn fetch_event(&self, id: &str) -> Result<Event> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(UnknownEvent))
    }

    /// Fetch multiple events by their ids
    async fn fetch_events<'a>(&self, ids: &'a [String]) -> Result<Vec<Event>> {
        query!(
            self,
            find,
            COL,
            doc! {
                "_id": {
                    "$in": ids
                }
            }
        )
    }

    /// Fetch events overlapping a date range, ordered by start date
    async fn fetch_events_in_range(
        &self,
        from: Timestamp,
        to: Timestamp,
        limit: Option<i64>,
    ) -> Result<Vec<Event>> {
        let from = timestamp_bson(&from)?;
        let to = timestamp_bson(&to)?;

        query!(
            self,
            find_with_options,
            COL,
            doc! {
                "$and": [
                    {
                        "$or": [
                            { "start_date": { "$lte": to.clone() } },
                            { "end_date": { "$lte": to.clone() } }
                        ]
                    },
                    {
                        "$or": [
                            { "start_date": { "$gte": from.clone() } },
                            { "end_date": { "$gte": from.clone() } }
                        ]
                    }
                ]
            },
            FindOptions::builder()
                .sort(doc! {
                    "start_date": 1_i32
                })
                .limit(limit)
                .build()
        )
    }

    /// Update an event by its id given some data
    async fn update_event(
        &self,
        id: &str,
        partial: &PartialEvent,
        remove: Vec<FieldsEvent>,
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

    /// Delete an event by its id
    async fn delete_event(&self, id: &str) -> Result<()> {
        let result = query!(self, delete_one_by_id, COL, id)?;
        if result.deleted_count == 0 {
            Err(create_error!(UnknownEvent))
        } else {
            Ok(())
        }
    }
}

impl IntoDocumentPath for FieldsEvent {
    fn as_path(&self) -> Option<&'static str> {
        Some(match self {
            FieldsEvent::Description => "description",
        })
    }
}

use attendance_database::{util::reference::Reference, Database, Session};
use attendance_models::v0;
use attendance_result::Result;
use axum::{
    extract::{Path, State},
    Json,
};

use crate::{discord::Discord, util::guards::target_user};

/// Fetch the chat platform avatar of a user
pub async fn fetch_avatar(
    State(db): State<Database>,
    State(discord): State<Discord>,
    session: Session,
    Path(target): Path<Reference>,
) -> Result<Json<v0::UserAvatar>> {
    let user = target_user(&db, &discord, &session, &target).await?;

    Ok(Json(v0::UserAvatar {
        avatar: discord.avatar(&user.id).await?,
    }))
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use attendance_models::v0;
    use axum::http::StatusCode;

    use crate::{discord::types::GuildMember, util::test::TestHarness};

    #[tokio::test]
    async fn avatar_from_cached_member() {
        let harness = TestHarness::new().await;
        let (session, user) = harness.new_user().await;

        harness.discord.members.write().await.insert(
            user.id.clone(),
            Arc::new(GuildMember {
                user: None,
                nick: None,
                roles: vec![],
                avatar: Some("a_1234".to_string()),
            }),
        );

        let response = harness.get("/users/@me/avatar", Some(&session)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let avatar: v0::UserAvatar = TestHarness::json(response).await;
        assert_eq!(avatar.avatar.as_deref(), Some("a_1234"));
    }
}

use axum::{extract::State, response::Redirect};

use crate::discord::Discord;

/// Send the requester to Discord to sign in
pub async fn discord_signin(State(discord): State<Discord>) -> Redirect {
    Redirect::to(&discord.authorize_url())
}

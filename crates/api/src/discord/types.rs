use serde::Deserialize;

/// Token issued by the OAuth2 code exchange
#[derive(Deserialize, Debug, Clone)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
}

/// Account of the signed in user
#[derive(Deserialize, Debug, Clone)]
pub struct DiscordUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub global_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Membership of a user in the configured guild
#[derive(Deserialize, Debug, Clone)]
pub struct GuildMember {
    #[serde(default)]
    pub user: Option<DiscordUser>,
    #[serde(default)]
    pub nick: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    /// Guild specific avatar
    #[serde(default)]
    pub avatar: Option<String>,
}

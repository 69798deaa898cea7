use std::{sync::Arc, time::Duration};

use attendance_database::IdentityProfile;
use attendance_result::{create_error, Error, Result};
use lru_time_cache::LruCache;
use reqwest::{Client, StatusCode};
use tokio::sync::RwLock;
use urlencoding::encode as url_encode;

pub mod types;

/// Scope requested when signing in
const OAUTH_SCOPE: &str = "identify";

fn service_error(error: impl std::fmt::Display) -> Error {
    log::error!("Discord request failed: {error}");
    create_error!(ExternalServiceError {
        service: "discord".to_string()
    })
}

/// Client for the Discord API
#[derive(Clone)]
pub struct Discord {
    pub config: Arc<attendance_config::Discord>,
    pub mentor_role: Arc<str>,
    pub client: Client,
    pub members: Arc<RwLock<LruCache<String, Arc<types::GuildMember>>>>,
}

impl Discord {
    pub fn new(config: attendance_config::Discord, mentor_role: &str) -> Self {
        // 5 minutes, 1k members
        let members =
            LruCache::with_expiry_duration_and_capacity(Duration::from_secs(60 * 5), 1000);

        Self {
            config: Arc::new(config),
            mentor_role: Arc::from(mentor_role),
            client: Client::new(),
            members: Arc::new(RwLock::new(members)),
        }
    }

    /// Whether the given role set grants mentor privileges
    pub fn is_mentor(&self, roles: &[String]) -> bool {
        !self.mentor_role.is_empty() && roles.iter().any(|role| role.as_str() == &*self.mentor_role)
    }

    /// Where to send a user to sign in
    pub fn authorize_url(&self) -> String {
        format!(
            "{}/oauth2/authorize?response_type=code&client_id={}&redirect_uri={}&scope={}",
            self.config.api_base,
            url_encode(&self.config.client_id),
            url_encode(&self.config.redirect_uri),
            OAUTH_SCOPE,
        )
    }

    /// Exchange an authorization code for an access token
    pub async fn exchange_code(&self, code: &str) -> Result<types::AccessToken> {
        let response = self
            .client
            .post(format!("{}/oauth2/token", self.config.api_base))
            .form(&[
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.config.redirect_uri.as_str()),
            ])
            .send()
            .await
            .map_err(service_error)?;

        if response.status() == StatusCode::BAD_REQUEST {
            // Expired or replayed code
            return Err(create_error!(InvalidOperation));
        }

        response
            .error_for_status()
            .map_err(service_error)?
            .json()
            .await
            .map_err(service_error)
    }

    /// Fetch the account an access token belongs to
    pub async fn current_user(&self, token: &types::AccessToken) -> Result<types::DiscordUser> {
        self.client
            .get(format!("{}/users/@me", self.config.api_base))
            .header(
                reqwest::header::AUTHORIZATION,
                format!("{} {}", token.token_type, token.access_token),
            )
            .send()
            .await
            .map_err(service_error)?
            .error_for_status()
            .map_err(service_error)?
            .json()
            .await
            .map_err(service_error)
    }

    /// Fetch a member of the configured guild, `None` if they are not in it
    pub async fn member(&self, user_id: &str) -> Result<Option<Arc<types::GuildMember>>> {
        if self.members.read().await.contains_key(user_id) {
            if let Some(member) = self.members.write().await.get(user_id) {
                return Ok(Some(member.clone()));
            }
        }

        let response = self
            .client
            .get(format!(
                "{}/guilds/{}/members/{}",
                self.config.api_base,
                self.config.guild_id,
                url_encode(user_id)
            ))
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bot {}", self.config.bot_token),
            )
            .send()
            .await
            .map_err(service_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let member: Arc<types::GuildMember> = Arc::new(
            response
                .error_for_status()
                .map_err(service_error)?
                .json()
                .await
                .map_err(service_error)?,
        );

        self.members
            .write()
            .await
            .insert(user_id.to_string(), member.clone());

        Ok(Some(member))
    }

    /// Avatar hash of a user, preferring their guild avatar
    pub async fn avatar(&self, user_id: &str) -> Result<Option<String>> {
        Ok(self.member(user_id).await?.and_then(|member| {
            member
                .avatar
                .clone()
                .or_else(|| member.user.as_ref().and_then(|user| user.avatar.clone()))
        }))
    }

    /// Resolve an access token into the profile used to sign in
    ///
    /// Users outside of the configured guild may not sign in.
    pub async fn identity(&self, token: &types::AccessToken) -> Result<IdentityProfile> {
        let user = self.current_user(token).await?;

        // Roles may have changed since the last lookup
        self.members.write().await.remove(&user.id);
        let member = self
            .member(&user.id)
            .await?
            .ok_or_else(|| create_error!(NotPrivileged))?;

        Ok(identity_profile(&user, &member))
    }
}

/// Build a profile from a Discord account and its guild membership
pub fn identity_profile(user: &types::DiscordUser, member: &types::GuildMember) -> IdentityProfile {
    let display_name = member
        .nick
        .as_deref()
        .or(user.global_name.as_deref())
        .unwrap_or(&user.username)
        .trim();

    let (first_name, last_name) = display_name
        .split_once(char::is_whitespace)
        .map(|(first, last)| (first.to_string(), last.trim().to_string()))
        .unwrap_or_else(|| (display_name.to_string(), String::new()));

    IdentityProfile {
        id: user.id.clone(),
        username: user.username.clone(),
        first_name,
        last_name,
        roles: member.roles.clone(),
    }
}

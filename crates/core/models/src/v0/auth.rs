auto_derived!(
    /// Authentication state of the current request
    pub struct AuthStatus {
        /// Whether a valid session was presented
        pub is_authenticated: bool,
        /// Roles held by the session
        pub roles: Vec<String>,
        /// Whether the session holds the mentor role
        pub is_admin: bool,
    }

    /// Query sent back by the identity provider
    pub struct OptionsOAuthCallback {
        /// Authorization code
        pub code: String,
    }
);

#[cfg(feature = "axum-impl")]
mod axum;
mod model;
mod ops;

#[cfg(feature = "axum-impl")]
pub use self::axum::SESSION_COOKIE;
pub use model::*;
pub use ops::*;

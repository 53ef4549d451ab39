pub mod claims;
pub mod extractors;
pub mod guards;

pub use claims::{AuthUser, Claims};

use chrono::{Duration, Utc};
use common::config::Config;
use jsonwebtoken::{EncodingKey, Header, encode};

/// Generates a JWT and its expiry timestamp for a given caller identity.
///
/// The API performs no user management; tokens are normally minted by the
/// external identity provider. This helper exists for operational tooling
/// and the integration tests.
pub fn generate_jwt(user_id: i64, admin: bool) -> (String, String) {
    let config = Config::get();

    let expiry = Utc::now() + Duration::minutes(config.jwt_duration_minutes as i64);
    let claims = Claims {
        sub: user_id,
        admin,
        exp: expiry.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .expect("Token encoding failed");

    (token, expiry.to_rfc3339())
}

//! Request authentication extractors.
//!
//! Clients send `Authorization: JWT <token>` (`Bearer` is accepted too).
//! Missing, invalid or expired tokens and tokens of inactive users leave the
//! request anonymous rather than rejecting it; resolvers decide what an
//! anonymous caller may do.

use std::net::{IpAddr, SocketAddr};

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};

use crate::error::{AppError, set_sentry_user};
use crate::models::User;
use crate::services::auth::AuthService;
use crate::state::AppState;

const AUTH_SCHEMES: [&str; 2] = ["JWT", "Bearer"];

/// Extractor for the user behind the request's auth token, if any.
pub struct OptionalUser(pub Option<User>);

impl FromRequestParts<AppState> for OptionalUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(&parts.headers) else {
            return Ok(Self(None));
        };

        let user = AuthService::new(state.store(), state.tokens())
            .user_for_token(token)
            .await?;
        if let Some(user) = &user {
            tracing::Span::current().record("user_id", user.id.as_i32());
            set_sentry_user(&user.id, Some(user.email.as_str()));
        }

        Ok(Self(user))
    }
}

/// Token from the `Authorization` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    (AUTH_SCHEMES.iter().any(|s| s.eq_ignore_ascii_case(scheme)) && !token.is_empty())
        .then_some(token)
}

/// Extractor for the client IP: the first `X-Forwarded-For` hop, else the
/// socket peer when the server records connection info.
pub struct ClientIp(pub Option<IpAddr>);

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let forwarded = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .and_then(|hop| hop.trim().parse::<IpAddr>().ok());

        let peer = || {
            parts
                .extensions
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip())
        };

        Ok(Self(forwarded.or_else(peer)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::{HeaderValue, Request};

    use super::*;

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            headers.insert(*name, HeaderValue::from_str(value).unwrap());
        }
        headers
    }

    #[test]
    fn test_bearer_token_schemes() {
        assert_eq!(
            bearer_token(&headers(&[("authorization", "JWT abc.def.ghi")])),
            Some("abc.def.ghi")
        );
        assert_eq!(
            bearer_token(&headers(&[("authorization", "Bearer abc")])),
            Some("abc")
        );
        assert_eq!(bearer_token(&headers(&[("authorization", "Basic abc")])), None);
        assert_eq!(bearer_token(&headers(&[("authorization", "JWT ")])), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[tokio::test]
    async fn test_client_ip_prefers_first_forwarded_hop() {
        let request = Request::builder()
            .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
            .extension(ConnectInfo(SocketAddr::from(([10, 0, 0, 2], 4000))))
            .body(())
            .unwrap();
        let (mut parts, ()) = request.into_parts();

        let ClientIp(ip) = ClientIp::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(ip, Some("203.0.113.7".parse().unwrap()));
    }

    #[tokio::test]
    async fn test_client_ip_falls_back_to_peer() {
        let request = Request::builder()
            .extension(ConnectInfo(SocketAddr::from(([192, 0, 2, 1], 4000))))
            .body(())
            .unwrap();
        let (mut parts, ()) = request.into_parts();

        let ClientIp(ip) = ClientIp::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(ip, Some("192.0.2.1".parse().unwrap()));
    }
}

//! Bearer-token extractors.
//!
//! `Caller` requires a valid token and rejects the request otherwise. `MaybeCaller` lets
//! unauthenticated requests through as the anonymous actor but still rejects a token
//! that is present and invalid.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderValue},
};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::audit::Audit,
    state::AppState,
};

/// Authenticated caller identity taken from the token's `id` claim.
#[derive(Debug, Clone, PartialEq)]
pub struct Caller {
    pub id: String,
}

impl Caller {
    /// Audit stamp for a write performed by this caller now.
    pub fn audit(&self) -> Audit {
        Audit::now(self.id.clone())
    }
}

impl FromRequestParts<AppState> for Caller {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?;

        authenticate(header, state)
    }
}

/// Caller identity when a token was supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct MaybeCaller(pub Option<Caller>);

impl MaybeCaller {
    /// Audit stamp for the caller, or the anonymous actor.
    pub fn audit(&self) -> Audit {
        match &self.0 {
            Some(caller) => caller.audit(),
            None => Audit::anonymous(),
        }
    }
}

impl FromRequestParts<AppState> for MaybeCaller {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match parts.headers.get(AUTHORIZATION) {
            Some(header) => Ok(Self(Some(authenticate(header, state)?))),
            None => Ok(Self(None)),
        }
    }
}

fn authenticate(header: &HeaderValue, state: &AppState) -> Result<Caller, AppError> {
    let token = bearer_token(header)?;
    let claims = state.tokens.verify(token)?;

    Ok(Caller { id: claims.id })
}

/// Extracts the token following the scheme in an `Authorization` header value.
fn bearer_token(header: &HeaderValue) -> Result<&str, AuthError> {
    header
        .to_str()
        .ok()
        .and_then(|value| value.split(' ').nth(1))
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MalformedToken)
}

//! Anonymous session extractor
//!
//! Reads the `blog_session` cookie, minting a fresh UUID v4 session when the
//! cookie is absent or malformed. The minted cookie is written back through
//! [`IntoResponseParts`], so handlers return the session alongside their body.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::{IntoResponseParts, ResponseParts},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;
use uuid::Uuid;

use crate::state::AppState;

/// Name of the anonymous session cookie
pub const SESSION_COOKIE: &str = "blog_session";

/// Anonymous reader session
#[derive(Debug, Clone)]
pub struct AnonymousSession {
    id: String,
    jar: CookieJar,
}

impl AnonymousSession {
    pub fn id(&self) -> &str {
        &self.id
    }

    fn existing(jar: &CookieJar) -> Option<String> {
        let raw = jar.get(SESSION_COOKIE)?.value();
        Uuid::parse_str(raw).ok().map(|id| id.to_string())
    }
}

/// Cookie for a freshly minted session
fn session_cookie(id: String, ttl_seconds: u64, secure: bool) -> Cookie<'static> {
    let max_age = Duration::seconds(i64::try_from(ttl_seconds).unwrap_or(i64::MAX));
    let mut cookie = Cookie::build((SESSION_COOKIE, id))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(max_age);
    if secure {
        cookie = cookie.secure(true);
    }
    cookie.build()
}

#[async_trait]
impl<S> FromRequestParts<S> for AnonymousSession
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        if let Some(id) = Self::existing(&jar) {
            // Nothing to write back
            return Ok(Self {
                id,
                jar: CookieJar::new(),
            });
        }

        let app_state = AppState::from_ref(state);
        let session = &app_state.config().session;
        let id = Uuid::new_v4().to_string();
        let cookie = session_cookie(id.clone(), session.ttl_seconds, session.cookie_secure);
        tracing::debug!("Minted anonymous session");

        Ok(Self {
            id,
            jar: CookieJar::new().add(cookie),
        })
    }
}

impl IntoResponseParts for AnonymousSession {
    type Error = Infallible;

    fn into_response_parts(self, res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        self.jar.into_response_parts(res)
    }
}

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{
    cookie::{Cookie, SameSite},
    CookieJar,
};

pub const TOKEN_COOKIE: &str = "access_token";
pub const ADMIN_COOKIE: &str = "is_admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Anonymous,
    Learner,
    Admin,
}

impl Role {
    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }
}

/// Session context read from the browser's cookies at the start of every
/// request and handed to the handler explicitly.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
    is_admin: bool,
}

impl Session {
    pub const LOGIN_PATH: &'static str = "/login";
    pub const HOME_PATH: &'static str = "/";

    pub fn new(token: Option<String>, is_admin: bool) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()),
            is_admin,
        }
    }

    pub fn from_jar(jar: &CookieJar) -> Self {
        let token = jar.get(TOKEN_COOKIE).map(|c| c.value().to_string());
        let is_admin = jar
            .get(ADMIN_COOKIE)
            .is_some_and(|c| c.value() == "true");
        Self::new(token, is_admin)
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn role(&self) -> Role {
        match (&self.token, self.is_admin) {
            (None, _) => Role::Anonymous,
            (Some(_), true) => Role::Admin,
            (Some(_), false) => Role::Learner,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn on_unauthorized(&self) -> Redirect {
        Redirect::to(Self::LOGIN_PATH)
    }

    /// Stores the bearer token and admin flag after a successful login.
    pub fn establish(jar: CookieJar, token: &str, is_admin: bool, secure: bool) -> CookieJar {
        jar.add(session_cookie(TOKEN_COOKIE, token.to_string(), secure))
            .add(session_cookie(ADMIN_COOKIE, is_admin.to_string(), secure))
    }

    pub fn clear(jar: CookieJar) -> CookieJar {
        let mut jar = jar;
        for name in [TOKEN_COOKIE, ADMIN_COOKIE] {
            let mut cookie = Cookie::build((name, "")).path("/").build();
            cookie.make_removal();
            jar = jar.add(cookie);
        }
        jar
    }
}

fn session_cookie(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build()
}

#[axum::async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Session {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        Ok(Session::from_jar(&jar))
    }
}

/// Guard for screens that need a signed-in user; redirects to the login
/// page otherwise.
#[derive(Debug, Clone)]
pub struct RequireUser {
    pub session: Session,
    pub token: String,
}

#[axum::async_trait]
impl<S: Send + Sync> FromRequestParts<S> for RequireUser {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_jar(&CookieJar::from_headers(&parts.headers));
        match session.token().map(str::to_owned) {
            Some(token) => Ok(RequireUser { session, token }),
            None => Err(session.on_unauthorized().into_response()),
        }
    }
}

/// Guard for admin screens: no token goes to login, a non-admin token goes
/// home.
#[derive(Debug, Clone)]
pub struct RequireAdmin {
    pub session: Session,
    pub token: String,
}

#[axum::async_trait]
impl<S: Send + Sync> FromRequestParts<S> for RequireAdmin {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_jar(&CookieJar::from_headers(&parts.headers));
        match (session.role(), session.token().map(str::to_owned)) {
            (Role::Admin, Some(token)) => Ok(RequireAdmin { session, token }),
            (Role::Learner, _) => Err(Redirect::to(Session::HOME_PATH).into_response()),
            _ => Err(session.on_unauthorized().into_response()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderMap, HeaderValue};

    fn jar(cookie: &str) -> CookieJar {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        CookieJar::from_headers(&headers)
    }

    #[test]
    fn role_follows_cookies() {
        assert_eq!(Session::from_jar(&jar("x=1")).role(), Role::Anonymous);
        assert_eq!(
            Session::from_jar(&jar("access_token=abc")).role(),
            Role::Learner
        );
        assert_eq!(
            Session::from_jar(&jar("access_token=abc; is_admin=false")).role(),
            Role::Learner
        );
        assert_eq!(
            Session::from_jar(&jar("access_token=abc; is_admin=true")).role(),
            Role::Admin
        );
        // The admin flag alone is not a session.
        assert_eq!(Session::from_jar(&jar("is_admin=true")).role(), Role::Anonymous);
        assert_eq!(Session::from_jar(&jar("access_token=")).token(), None);
    }

    #[test]
    fn establish_then_read_back() {
        let jar = Session::establish(CookieJar::new(), "tok", true, false);
        let session = Session::from_jar(&jar);
        assert_eq!(session.token(), Some("tok"));
        assert!(session.role().is_admin());
    }
}

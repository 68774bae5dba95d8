#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use artboard_api::{build_router, AppState};
use artboard_core::ports::{AuthProvider, ReportSink, SignUpRequest};
use artboard_core::{
    AuthError, AuthSession, AuthUser, DomainError, ReportPayload, RuleTable, SignUpOutcome,
};
use artboard_shared::CookieSettings;
use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Request, Response};
use axum::Router;
use uuid::Uuid;

pub const SITE_URL: &str = "https://artboard.test";

pub fn user(email: &str, role: Option<&str>) -> AuthUser {
    AuthUser::new(Uuid::new_v4(), Some(email.to_string()), role.map(str::to_string))
}

pub fn session(access: &str, refresh: &str, user: AuthUser) -> AuthSession {
    AuthSession {
        access_token: access.to_string(),
        refresh_token: refresh.to_string(),
        expires_in: 3600,
        expires_at: None,
        user,
    }
}

/// In-memory auth service.
#[derive(Default)]
pub struct FakeAuth {
    pub users: HashMap<String, AuthUser>,
    pub refresh: HashMap<String, AuthSession>,
    pub codes: HashMap<String, AuthSession>,
    pub passwords: HashMap<(String, String), AuthSession>,
    pub unreachable: bool,
    pub get_user_calls: AtomicUsize,
    pub refresh_calls: AtomicUsize,
    pub exchange_calls: AtomicUsize,
    pub sign_out_calls: AtomicUsize,
    pub verifiers: Mutex<Vec<Option<String>>>,
}

impl FakeAuth {
    pub fn with_user(mut self, token: &str, user: AuthUser) -> Self {
        self.users.insert(token.to_string(), user);
        self
    }

    pub fn with_refresh(mut self, refresh_token: &str, session: AuthSession) -> Self {
        self.refresh.insert(refresh_token.to_string(), session);
        self
    }

    pub fn with_code(mut self, code: &str, session: AuthSession) -> Self {
        self.codes.insert(code.to_string(), session);
        self
    }

    pub fn with_password(mut self, email: &str, password: &str, session: AuthSession) -> Self {
        self.passwords.insert((email.to_string(), password.to_string()), session);
        self
    }

    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    fn reachable(&self) -> Result<(), AuthError> {
        if self.unreachable {
            Err(AuthError::Transport("connection refused".into()))
        } else {
            Ok(())
        }
    }

    pub fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthProvider for FakeAuth {
    async fn get_user(&self, access_token: &str) -> Result<AuthUser, AuthError> {
        self.get_user_calls.fetch_add(1, Ordering::SeqCst);
        self.reachable()?;
        self.users
            .get(access_token)
            .cloned()
            .ok_or_else(|| AuthError::Rejected("invalid JWT: token is expired".into()))
    }

    async fn refresh_session(&self, refresh_token: &str) -> Result<AuthSession, AuthError> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        self.reachable()?;
        self.refresh
            .get(refresh_token)
            .cloned()
            .ok_or_else(|| AuthError::Rejected("Invalid Refresh Token".into()))
    }

    async fn exchange_code(
        &self,
        auth_code: &str,
        code_verifier: Option<String>,
    ) -> Result<AuthSession, AuthError> {
        self.exchange_calls.fetch_add(1, Ordering::SeqCst);
        self.verifiers.lock().unwrap().push(code_verifier);
        self.reachable()?;
        self.codes
            .get(auth_code)
            .cloned()
            .ok_or_else(|| AuthError::Rejected("invalid flow state".into()))
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AuthError> {
        self.reachable()?;
        self.passwords
            .get(&(email.to_string(), password.to_string()))
            .cloned()
            .ok_or_else(|| AuthError::Rejected("Invalid login credentials".into()))
    }

    async fn sign_up(&self, request: SignUpRequest) -> Result<SignUpOutcome, AuthError> {
        self.reachable()?;
        Ok(SignUpOutcome::ConfirmationRequired(user(&request.email, None)))
    }

    async fn sign_out(&self, _access_token: &str) -> Result<(), AuthError> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        self.reachable()
    }
}

/// Keeps every accepted report.
#[derive(Default)]
pub struct RecordingSink {
    pub reports: Mutex<Vec<(AuthUser, ReportPayload)>>,
}

impl RecordingSink {
    pub fn len(&self) -> usize {
        self.reports.lock().unwrap().len()
    }
}

#[async_trait]
impl ReportSink for RecordingSink {
    async fn submit(&self, reporter: &AuthUser, payload: &ReportPayload) -> Result<(), DomainError> {
        self.reports.lock().unwrap().push((reporter.clone(), payload.clone()));
        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub auth: Arc<FakeAuth>,
    pub sink: Arc<RecordingSink>,
}

impl TestApp {
    pub fn new(auth: FakeAuth) -> Self {
        Self::with_rules(auth, RuleTable::default_rules())
    }

    pub fn with_rules(auth: FakeAuth, rules: RuleTable) -> Self {
        let auth = Arc::new(auth);
        let sink = Arc::new(RecordingSink::default());
        let state = AppState::with_rules(
            auth.clone(),
            sink.clone(),
            CookieSettings::default(),
            SITE_URL,
            rules,
        );
        Self { router: build_router(state), auth, sink }
    }
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, cookie: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok())
}

pub fn set_cookies(headers: &HeaderMap) -> Vec<String> {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}

/// `Set-Cookie` line for `name`, if the response wrote one.
pub fn set_cookie<'a>(cookies: &'a [String], name: &str) -> Option<&'a str> {
    let prefix = format!("{}=", name);
    cookies.iter().map(String::as_str).find(|c| c.starts_with(&prefix))
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

//! HTML shells for the site's pages. Layout and styling live in the front end.

use artboard_core::services::decide_access;
use artboard_core::{AccessDecision, AuthUser, RoleRequirement};
use artboard_shared::constants::ROLE_ADMIN;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::extract::{AuthenticatedUser, MaybeUser};

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>{} | Artboard</title></head>\
         <body><main>{}</main></body></html>",
        escape(title),
        body
    ))
}

fn greeting(user: &AuthUser) -> String {
    escape(user.email.as_deref().unwrap_or("artist"))
}

pub async fn home() -> Html<String> {
    page("Home", "<h1>Artboard</h1><p>Share your art. Keep it yours.</p>")
}

pub async fn login() -> Html<String> {
    page("Log in", "<h1>Log in</h1><form id=\"login\" method=\"post\" action=\"/api/auth/login\"></form>")
}

pub async fn register() -> Html<String> {
    page(
        "Register",
        "<h1>Create an account</h1><form id=\"register\" method=\"post\" action=\"/api/auth/register\"></form>",
    )
}

pub async fn about() -> Html<String> {
    page("About", "<h1>About</h1>")
}

pub async fn faq() -> Html<String> {
    page("FAQ", "<h1>Frequently asked questions</h1>")
}

pub async fn gallery(MaybeUser(user): MaybeUser) -> Html<String> {
    let banner = match &user {
        Some(user) => format!("<p class=\"session\">Signed in as {}</p>", greeting(user)),
        None => "<p class=\"session\"><a href=\"/login\">Log in</a> to vote or report.</p>".to_string(),
    };
    page("Gallery", &format!("<h1>Gallery</h1>{}", banner))
}

pub async fn plagiarism_checker() -> Html<String> {
    page("Plagiarism checker", "<h1>Plagiarism checker</h1>")
}

pub async fn dashboard(AuthenticatedUser(user): AuthenticatedUser) -> Html<String> {
    page("Dashboard", &format!("<h1>Dashboard</h1><p>Welcome, {}.</p>", greeting(&user)))
}

/// The route gate already enforces the admin rule; this page checks again
/// so it stays closed when the rule table is reconfigured.
pub async fn admin(AuthenticatedUser(user): AuthenticatedUser) -> Response {
    let requirement = RoleRequirement::Role(ROLE_ADMIN.to_string());
    match decide_access(Some(&requirement), Some(&user)) {
        AccessDecision::Allow => {
            page("Admin", &format!("<h1>Admin</h1><p>Signed in as {}.</p>", greeting(&user))).into_response()
        }
        AccessDecision::Redirect(target) => Redirect::to(target).into_response(),
    }
}

pub async fn not_found_page() -> Html<String> {
    page("Not found", "<h1>404</h1><p>This page could not be found.</p>")
}

pub async fn fallback() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, not_found_page().await)
}

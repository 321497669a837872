#![allow(dead_code)]

use askbox::{app, config::Config, AppState};
use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use tower::ServiceExt;

pub fn test_app() -> Router {
    app(AppState::new().unwrap(), &Config::default())
}

pub struct Reply {
    pub status: StatusCode,
    pub cookies: Vec<(String, String)>,
    pub push_url: Option<String>,
    pub body: String,
}

impl Reply {
    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> Reply {
    let response = app.clone().oneshot(request).await.unwrap();
    reply(response).await
}

async fn reply(response: Response<Body>) -> Reply {
    let status = response.status();
    let cookies = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|value| {
            let value = value.to_str().unwrap();
            let pair = value.split(';').next().unwrap();
            let (name, value) = pair.split_once('=').unwrap();
            (name.trim().to_owned(), value.trim().to_owned())
        })
        .collect();
    let push_url = response
        .headers()
        .get("hx-push-url")
        .map(|value| value.to_str().unwrap().to_owned());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();

    Reply {
        status,
        cookies,
        push_url,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub fn get(uri: &str, cookies: &[(&str, &str)]) -> Request<Body> {
    with_cookies(Request::get(uri), cookies)
        .body(Body::empty())
        .unwrap()
}

pub fn post(uri: &str, cookies: &[(&str, &str)]) -> Request<Body> {
    with_cookies(Request::post(uri), cookies)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, cookies: &[(&str, &str)], form: &str) -> Request<Body> {
    with_cookies(Request::post(uri), cookies)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_owned()))
        .unwrap()
}

fn with_cookies(
    mut builder: axum::http::request::Builder,
    cookies: &[(&str, &str)],
) -> axum::http::request::Builder {
    if !cookies.is_empty() {
        let header = cookies
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ");
        builder = builder.header(header::COOKIE, header);
    }
    builder
}

/// Creates a room and returns `(room id, owner secret)`.
pub async fn create_room(app: &Router) -> (String, String) {
    let reply = send(app, post("/create", &[])).await;
    assert_eq!(reply.status, StatusCode::OK);

    (
        reply.cookie("room").unwrap().to_owned(),
        reply.cookie("roomMasterKey").unwrap().to_owned(),
    )
}

pub async fn ask(app: &Router, room_id: &str, form: &str) -> Reply {
    send(app, post_form("/addquestion", &[("room", room_id)], form)).await
}

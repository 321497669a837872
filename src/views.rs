//! The rendering boundary.
//!
//! Handlers never hand loose data to the template engine. Every response body
//! is one of the [`View`] variants, and each variant owns exactly one template
//! and one data shape.

use std::sync::Arc;

use anyhow::Context;
use axum::response::Html;
use handlebars::Handlebars;
use serde_json::{json, Value};

use crate::{include_res, questions::Paging, rooms::Room, AppResult};

pub enum View<'a> {
    Home,
    /// Full question list, only ever shown to the holder of the owner secret.
    Owner(&'a Room),
    Prompt,
    Count(usize),
    Paging(Paging),
    RoomClosed,
}

impl View<'_> {
    fn template(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Owner(_) => "owner",
            View::Prompt => "prompt",
            View::Count(_) => "count",
            View::Paging(_) => "view",
            View::RoomClosed => "room_closed",
        }
    }

    fn data(&self) -> Value {
        match self {
            View::Home | View::Prompt | View::RoomClosed => json!({}),
            View::Owner(room) => json!({
                "room_id": room.id,
                "questions": room.questions,
                "count": room.questions.len(),
            }),
            View::Count(count) => json!({ "count": count }),
            View::Paging(paging) => json!({
                "question": paging.question,
                "pos": paging.pos,
                "number": paging.pos + 1,
                "end": paging.end,
                "empty": paging.end == 0,
                "first": paging.pos == 0,
                "last": paging.pos + 1 >= paging.end,
            }),
        }
    }
}

/// Compiled templates, shared by all handlers.
#[derive(Clone)]
pub struct Templates(Arc<Handlebars<'static>>);

impl Templates {
    pub fn new() -> anyhow::Result<Self> {
        let mut handlebars = Handlebars::new();
        let sources = [
            ("base", include_res!(str, "/pages/base.html")),
            ("home", include_res!(str, "/pages/home.html")),
            ("owner", include_res!(str, "/pages/owner.html")),
            ("prompt", include_res!(str, "/pages/prompt.html")),
            ("count", include_res!(str, "/pages/count.html")),
            ("view", include_res!(str, "/pages/view.html")),
            ("room_closed", include_res!(str, "/pages/room_closed.html")),
        ];
        for (name, source) in sources {
            handlebars
                .register_template_string(name, source)
                .with_context(|| format!("compiling template {name}"))?;
        }

        Ok(Self(Arc::new(handlebars)))
    }

    /// Renders a fragment, meant to be swapped into an existing page.
    pub fn render(&self, view: &View) -> AppResult<Html<String>> {
        Ok(Html(self.fragment(view)?))
    }

    /// Renders a complete document with the fragment inside `base.html`.
    pub fn render_page(&self, view: &View) -> AppResult<Html<String>> {
        let content = self.fragment(view)?;
        let page = self
            .0
            .render("base", &json!({ "content": content }))
            .context("rendering base")?;

        Ok(Html(page))
    }

    fn fragment(&self, view: &View) -> anyhow::Result<String> {
        let name = view.template();
        self.0
            .render(name, &view.data())
            .with_context(|| format!("rendering {name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{questions::Question, rooms::Room};

    #[test]
    fn owner_view_escapes_questions() {
        let templates = Templates::new().unwrap();
        let mut room = Room::new();
        room.questions.push(Question::new("<b>Bob</b>", "why & how?"));

        let Html(html) = templates.render(&View::Owner(&room)).unwrap();

        assert!(html.contains(&room.id));
        assert!(html.contains("&lt;b&gt;Bob&lt;/b&gt;"));
        assert!(html.contains("why &amp; how?"));
        assert!(!html.contains(&room.owner_secret));
    }

    #[test]
    fn page_wraps_fragment() {
        let templates = Templates::new().unwrap();

        let Html(page) = templates.render_page(&View::Prompt).unwrap();
        let Html(fragment) = templates.render(&View::Prompt).unwrap();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(fragment.trim()));
    }

    #[test]
    fn count_view_shows_count() {
        let templates = Templates::new().unwrap();
        let Html(html) = templates.render(&View::Count(42)).unwrap();
        assert!(html.contains("42"));
    }
}

mod add;
mod count;
mod view;

use axum::{routing::get, Router};
use serde::{Deserialize, Serialize};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/addquestion", get(add::prompt).post(add::add_question))
        .route("/count", get(count::count))
        .route("/view", get(view::view))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Who the question is for. Free text.
    #[serde(rename = "to")]
    pub recipient: String,
    pub body: String,
}

impl Question {
    pub fn new(recipient: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Prev,
}

impl Step {
    pub fn parse(action: &str) -> Option<Self> {
        match action {
            "next" => Some(Step::Next),
            "prev" => Some(Step::Prev),
            _ => None,
        }
    }
}

/// One page of the owner's presentation view.
///
/// The default value (no question, `end == 0`) is what gets shown when the
/// requested index does not address a question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Paging {
    pub question: Question,
    pub pos: usize,
    pub end: usize,
}

impl Paging {
    /// The page for index `n`, moved one step if `step` is given. Moving never
    /// leaves `0..questions.len()`.
    pub fn at(questions: &[Question], n: i64, step: Option<Step>) -> Self {
        let len = questions.len() as i64;
        if len < n {
            return Self::default();
        }

        let n = match step {
            Some(Step::Next) => (len - 1).min(n.saturating_add(1)),
            Some(Step::Prev) => 0.max(n.saturating_sub(1)),
            None => n,
        };

        usize::try_from(n)
            .ok()
            .and_then(|pos| {
                questions.get(pos).map(|question| Paging {
                    question: question.clone(),
                    pos,
                    end: questions.len(),
                })
            })
            .unwrap_or_default()
    }
}

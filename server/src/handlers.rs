//! Route handlers. Each one validates its input, makes one store call and
//! writes either a short plain-text message or the JSON list of todos.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, Method},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::{
    error::{AppError, ValidationError},
    store::TodoStore,
    todo::{CreateTodo, TodoChange},
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TodoStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }
}

/// Query parameters accepted by `/updateTodo` and `/deleteTodo`. Values stay
/// raw strings so that parse failures produce our own messages.
#[derive(Debug, Default)]
pub struct TodoParams {
    pub id: Option<String>,
    pub title: Option<String>,
    pub done: Option<String>,
}

impl TodoParams {
    /// Collect known keys from decoded query pairs. A repeated key keeps its
    /// first value; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "id" => &mut params.id,
                "title" => &mut params.title,
                "done" => &mut params.done,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

pub async fn create_todo(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<&'static str, AppError> {
    let input: CreateTodo =
        serde_json::from_slice(&body).map_err(|_| ValidationError::InvalidBody)?;
    state.store.create(&input.title).await?;
    Ok("Todo created\n")
}

pub async fn update_todo(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<&'static str, AppError> {
    let (id, change) = parse_update(&TodoParams::from_pairs(pairs))?;
    state.store.update(id, change).await?;
    Ok("Todo updated\n")
}

pub async fn delete_todo(
    State(state): State<AppState>,
    method: Method,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<&'static str, AppError> {
    if method != Method::DELETE {
        return Err(ValidationError::ExpectedDelete.into());
    }
    let params = TodoParams::from_pairs(pairs);
    let id = parse_id(params.id.as_deref())?;
    state.store.delete(id).await?;
    Ok("Todo Deleted\n")
}

pub async fn get_all_todos(State(state): State<AppState>) -> Result<Response, AppError> {
    let todos = state.store.list_all().await.map_err(AppError::ListTodos)?;
    for todo in &todos {
        debug!(id = todo.id, title = %todo.title, done = todo.done, "listed todo");
    }
    let body = serde_json::to_vec(&todos).map_err(AppError::Encode)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Validate update parameters in the order clients see errors: the
/// title/done conflict first, then the id, then the boolean.
pub fn parse_update(params: &TodoParams) -> Result<(i32, TodoChange), ValidationError> {
    enum Field<'a> {
        Title(&'a str),
        Done(&'a str),
    }

    let field = match (
        present(params.title.as_deref()),
        present(params.done.as_deref()),
    ) {
        (Some(title), None) => Field::Title(title),
        (None, Some(done)) => Field::Done(done),
        _ => return Err(ValidationError::ConflictingUpdate),
    };

    let id = parse_id(params.id.as_deref())?;
    let change = match field {
        Field::Title(title) => TodoChange::Title(title.to_string()),
        Field::Done(raw) => TodoChange::Done(parse_bool(raw).ok_or(ValidationError::InvalidDone)?),
    };
    Ok((id, change))
}

pub fn parse_id(raw: Option<&str>) -> Result<i32, ValidationError> {
    let raw = present(raw).ok_or(ValidationError::MissingId)?;
    raw.parse().map_err(|_| ValidationError::InvalidId)
}

/// The boolean spellings browsers and scripts commonly send.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

// An empty value counts as absent.
fn present(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(id: Option<&str>, title: Option<&str>, done: Option<&str>) -> TodoParams {
        TodoParams {
            id: id.map(str::to_string),
            title: title.map(str::to_string),
            done: done.map(str::to_string),
        }
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn repeated_keys_keep_first_value() {
        let p = TodoParams::from_pairs(pairs(&[
            ("id", "1"),
            ("title", "A"),
            ("id", "2"),
            ("title", "B"),
            ("extra", "x"),
        ]));
        assert_eq!(p.id.as_deref(), Some("1"));
        assert_eq!(p.title.as_deref(), Some("A"));
        assert!(p.done.is_none());
    }

    #[test]
    fn update_with_title() {
        let (id, change) = parse_update(&params(Some("3"), Some("A"), None)).unwrap();
        assert_eq!(id, 3);
        assert_eq!(change, TodoChange::Title("A".into()));
    }

    #[test]
    fn update_with_done() {
        let (_, change) = parse_update(&params(Some("3"), None, Some("true"))).unwrap();
        assert_eq!(change, TodoChange::Done(true));
    }

    #[test]
    fn update_with_both_is_rejected() {
        let err = parse_update(&params(Some("1"), Some("A"), Some("true"))).unwrap_err();
        assert_eq!(err, ValidationError::ConflictingUpdate);
    }

    #[test]
    fn update_with_neither_is_rejected_before_id() {
        let err = parse_update(&params(None, None, None)).unwrap_err();
        assert_eq!(err, ValidationError::ConflictingUpdate);
    }

    #[test]
    fn empty_title_counts_as_absent() {
        let (_, change) = parse_update(&params(Some("1"), Some(""), Some("false"))).unwrap();
        assert_eq!(change, TodoChange::Done(false));
    }

    #[test]
    fn update_with_bad_done_is_rejected() {
        let err = parse_update(&params(Some("1"), None, Some("yes"))).unwrap_err();
        assert_eq!(err, ValidationError::InvalidDone);
    }

    #[test]
    fn update_checks_id_before_done() {
        let err = parse_update(&params(Some("x"), None, Some("yes"))).unwrap_err();
        assert_eq!(err, ValidationError::InvalidId);
    }

    #[test]
    fn id_parsing() {
        assert_eq!(parse_id(Some("42")), Ok(42));
        assert_eq!(parse_id(Some("-1")), Ok(-1));
        assert_eq!(parse_id(None), Err(ValidationError::MissingId));
        assert_eq!(parse_id(Some("")), Err(ValidationError::MissingId));
        assert_eq!(parse_id(Some("1.5")), Err(ValidationError::InvalidId));
        assert_eq!(parse_id(Some("99999999999")), Err(ValidationError::InvalidId));
    }

    #[test]
    fn bool_spellings() {
        for raw in ["1", "t", "T", "true", "TRUE", "True"] {
            assert_eq!(parse_bool(raw), Some(true), "{raw}");
        }
        for raw in ["0", "f", "F", "false", "FALSE", "False"] {
            assert_eq!(parse_bool(raw), Some(false), "{raw}");
        }
        assert_eq!(parse_bool("tRuE"), None);
        assert_eq!(parse_bool("yes"), None);
    }
}

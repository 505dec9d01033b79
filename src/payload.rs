use axum::async_trait;
use axum::extract::{Form, FromRequest, Request};
use axum::http::header;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::error::Error;
use crate::models::NewTodo;

const NO_NAME: &str = "No todo name provided";
const NO_COMPLETED: &str = "No status of completed provided";

/// Raw `{name, completed}` body of a create or update request, accepted as
/// either JSON or an urlencoded form depending on the Content-Type header.
/// Both fields are required; validation runs before any storage access.
#[derive(Debug, Default, Deserialize)]
pub struct TodoPayload {
    name: Option<String>,
    completed: Option<Value>,
}

impl TodoPayload {
    pub fn validate(self) -> Result<NewTodo, Error> {
        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(Error::MissingField(NO_NAME)),
        };
        let completed = match self.completed {
            Some(value) => coerce_bool(&value)?,
            None => return Err(Error::MissingField(NO_COMPLETED)),
        };
        Ok(NewTodo { name, completed })
    }
}

/// Boolean coercion for form input and sloppy JSON clients: accepts a real
/// boolean, the tokens true/false/1/0 (case-insensitive), or the numbers
/// 1 and 0.
fn coerce_bool(value: &Value) -> Result<bool, Error> {
    match value {
        Value::Bool(flag) => Ok(*flag),
        Value::String(text) => match text.to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(Error::InvalidBool(other.to_string())),
        },
        Value::Number(num) => match num.as_i64() {
            Some(1) => Ok(true),
            Some(0) => Ok(false),
            _ => Err(Error::InvalidBool(num.to_string())),
        },
        other => Err(Error::InvalidBool(other.to_string())),
    }
}

// Form bodies arrive with every value as a string; JSON keeps `completed`
// as whatever the client sent and coercion sorts it out later.
#[derive(Debug, Default, Deserialize)]
struct FormPayload {
    name: Option<String>,
    completed: Option<String>,
}

#[async_trait]
impl<S> FromRequest<S> for TodoPayload
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&req) {
            let Json(payload): Json<TodoPayload> = Json::from_request(req, state)
                .await
                .map_err(|err| Error::InvalidBody(err.to_string()))?;
            Ok(payload)
        } else {
            let Form(form): Form<FormPayload> = Form::from_request(req, state)
                .await
                .map_err(|err| Error::InvalidBody(err.to_string()))?;
            Ok(TodoPayload {
                name: form.name,
                completed: form.completed.map(Value::String),
            })
        }
    }
}

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

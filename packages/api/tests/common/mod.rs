//! In-process stand-in for the Knowledge Hub backend, served with axum on an
//! ephemeral port. It mirrors the backend's status codes and `detail` payloads.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use api::{Document, UserInfo};
use axum::extract::{Form, Json, Path, State};
use axum::http::{header::AUTHORIZATION, HeaderMap, StatusCode};
use axum::routing::get;
use axum::Router;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::Deserialize;
use serde_json::{json, Value};

type Failure = (StatusCode, Json<Value>);

fn detail(status: StatusCode, message: &str) -> Failure {
    (status, Json(json!({ "detail": message })))
}

#[derive(Default)]
struct Db {
    users: Vec<(UserInfo, String)>,
    documents: Vec<Document>,
    next_user_id: i64,
    next_document_id: i64,
    clock: i64,
    requests: usize,
    me_fails: bool,
}

impl Db {
    fn now(&mut self) -> DateTime<Utc> {
        self.clock += 1;
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(self.clock)
    }

    fn current_user(&self, headers: &HeaderMap) -> Result<UserInfo, Failure> {
        let token = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or_else(|| detail(StatusCode::UNAUTHORIZED, "Not authenticated"))?;
        self.users
            .iter()
            .find(|(user, _)| FakeBackend::token_for(user.id) == token)
            .map(|(user, _)| user.clone())
            .ok_or_else(|| detail(StatusCode::UNAUTHORIZED, "Invalid token"))
    }

    fn owned_index(&self, owner: i64, id: i64) -> Result<usize, Failure> {
        self.documents
            .iter()
            .position(|d| d.id == id && d.owner_id == owner)
            .ok_or_else(|| detail(StatusCode::NOT_FOUND, "Document not found"))
    }
}

fn validation_error(field: &str) -> Failure {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
            "detail": [{
                "type": "string_too_short",
                "loc": ["body", field],
                "msg": "String should have at least 1 character",
            }]
        })),
    )
}

#[derive(Clone, Default)]
pub struct FakeBackend {
    db: Arc<Mutex<Db>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token the fake issues for a user id.
    pub fn token_for(user_id: i64) -> String {
        format!("token-{user_id}")
    }

    pub fn add_user(&self, email: &str, password: &str) -> UserInfo {
        let mut db = self.db.lock().unwrap();
        db.next_user_id += 1;
        let user = UserInfo {
            id: db.next_user_id,
            email: email.to_string(),
        };
        db.users.push((user.clone(), password.to_string()));
        user
    }

    pub fn add_document(&self, owner_id: i64, title: &str, content: &str) -> Document {
        let mut db = self.db.lock().unwrap();
        db.next_document_id += 1;
        let now = db.now();
        let doc = Document {
            id: db.next_document_id,
            title: title.to_string(),
            content: content.to_string(),
            owner_id,
            created_at: now,
            updated_at: now,
        };
        db.documents.push(doc.clone());
        doc
    }

    /// Make `/auth/me` answer 500 until switched back.
    pub fn fail_me(&self, fail: bool) {
        self.db.lock().unwrap().me_fails = fail;
    }

    /// Number of requests served so far.
    pub fn requests(&self) -> usize {
        self.db.lock().unwrap().requests
    }

    /// Start serving on 127.0.0.1 and return the base URL.
    pub async fn serve(&self) -> String {
        let app = Router::new()
            .route("/health", get(health))
            .route("/auth/login", axum::routing::post(login))
            .route("/auth/register", axum::routing::post(register))
            .route("/auth/me", get(me))
            .route("/documents", get(list_documents).post(create_document))
            .route("/documents/{id}", get(get_document).put(update_document))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }
}

async fn health(State(backend): State<FakeBackend>) -> Json<Value> {
    backend.db.lock().unwrap().requests += 1;
    Json(json!({ "status": "ok" }))
}

#[derive(Deserialize)]
struct LoginForm {
    username: String,
    password: String,
}

async fn login(
    State(backend): State<FakeBackend>,
    Form(form): Form<LoginForm>,
) -> Result<Json<Value>, Failure> {
    let mut db = backend.db.lock().unwrap();
    db.requests += 1;
    let user = db
        .users
        .iter()
        .find(|(user, password)| user.email == form.username && *password == form.password)
        .map(|(user, _)| user.clone())
        .ok_or_else(|| detail(StatusCode::BAD_REQUEST, "Incorrect email or password"))?;
    Ok(Json(json!({
        "access_token": FakeBackend::token_for(user.id),
        "token_type": "bearer",
    })))
}

#[derive(Deserialize)]
struct RegisterBody {
    email: String,
    password: String,
}

async fn register(
    State(backend): State<FakeBackend>,
    Json(body): Json<RegisterBody>,
) -> Result<(StatusCode, Json<UserInfo>), Failure> {
    {
        let mut db = backend.db.lock().unwrap();
        db.requests += 1;
        if db.users.iter().any(|(user, _)| user.email == body.email) {
            return Err(detail(StatusCode::CONFLICT, "Email already registered"));
        }
    }
    let user = backend.add_user(&body.email, &body.password);
    Ok((StatusCode::CREATED, Json(user)))
}

async fn me(State(backend): State<FakeBackend>, headers: HeaderMap) -> Result<Json<UserInfo>, Failure> {
    let mut db = backend.db.lock().unwrap();
    db.requests += 1;
    if db.me_fails {
        return Err(detail(StatusCode::INTERNAL_SERVER_ERROR, "Database unavailable"));
    }
    db.current_user(&headers).map(Json)
}

async fn list_documents(
    State(backend): State<FakeBackend>,
    headers: HeaderMap,
) -> Result<Json<Vec<Document>>, Failure> {
    let mut db = backend.db.lock().unwrap();
    db.requests += 1;
    let user = db.current_user(&headers)?;
    let mut docs: Vec<Document> = db
        .documents
        .iter()
        .filter(|d| d.owner_id == user.id)
        .cloned()
        .collect();
    docs.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    Ok(Json(docs))
}

async fn get_document(
    State(backend): State<FakeBackend>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<Document>, Failure> {
    let mut db = backend.db.lock().unwrap();
    db.requests += 1;
    let user = db.current_user(&headers)?;
    let index = db.owned_index(user.id, id)?;
    Ok(Json(db.documents[index].clone()))
}

#[derive(Deserialize)]
struct CreateBody {
    title: String,
    content: String,
}

async fn create_document(
    State(backend): State<FakeBackend>,
    headers: HeaderMap,
    Json(body): Json<CreateBody>,
) -> Result<(StatusCode, Json<Document>), Failure> {
    let owner = {
        let mut db = backend.db.lock().unwrap();
        db.requests += 1;
        db.current_user(&headers)?
    };
    if body.title.is_empty() {
        return Err(validation_error("title"));
    }
    let doc = backend.add_document(owner.id, &body.title, &body.content);
    Ok((StatusCode::CREATED, Json(doc)))
}

#[derive(Deserialize)]
struct UpdateBody {
    title: Option<String>,
    content: Option<String>,
}

async fn update_document(
    State(backend): State<FakeBackend>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<UpdateBody>,
) -> Result<Json<Document>, Failure> {
    let mut db = backend.db.lock().unwrap();
    db.requests += 1;
    let user = db.current_user(&headers)?;
    let index = db.owned_index(user.id, id)?;
    let now = db.now();
    let doc = &mut db.documents[index];
    if let Some(title) = body.title {
        doc.title = title;
    }
    if let Some(content) = body.content {
        doc.content = content;
    }
    doc.updated_at = now;
    Ok(Json(doc.clone()))
}

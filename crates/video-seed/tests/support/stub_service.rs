//! In-process stub of the video API, served over real HTTP.
//!
//! Mirrors the status codes and response shapes of the service's user
//! routes closely enough to exercise the reqwest adapter end to end.

use std::collections::{HashMap, HashSet};
use std::io;
use std::net::SocketAddr;
use std::sync::Mutex;

use actix_web::dev::ServerHandle;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::{Value, json};

/// Endpoint a recorded request hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `POST /api/users`
    CreateUser,
    /// `POST /api/users/login`
    Login,
    /// `POST /api/users/{id}/videos`
    AttachVideo {
        /// Path identifier.
        user_id: String,
    },
}

/// One request observed by the stub.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Endpoint hit.
    pub endpoint: Endpoint,
    /// Raw `Authorization` header, if sent.
    pub authorization: Option<String>,
    /// Decoded JSON body.
    pub body: Value,
}

/// Failure modes the stub applies by email address.
#[derive(Debug, Default, Clone)]
pub struct StubBehaviour {
    /// Accounts that exist before the run; creating them again fails with 400.
    pub existing_users: HashSet<String>,
    /// Emails whose creation fails with 500.
    pub reject_creation: HashSet<String>,
    /// Emails whose login fails with 400.
    pub reject_login: HashSet<String>,
}

impl StubBehaviour {
    /// Treat `email` as an account created by an earlier run.
    #[must_use]
    pub fn with_existing_user(mut self, email: &str) -> Self {
        self.existing_users.insert(email.to_owned());
        self
    }

    /// Fail every creation of `email` with a server error.
    #[must_use]
    pub fn rejecting_creation_of(mut self, email: &str) -> Self {
        self.reject_creation.insert(email.to_owned());
        self
    }
}

struct StubState {
    behaviour: StubBehaviour,
    requests: Mutex<Vec<RecordedRequest>>,
    ids: Mutex<HashMap<String, String>>,
    next_id: Mutex<u32>,
}

impl StubState {
    fn new(behaviour: StubBehaviour) -> Self {
        let state = Self {
            behaviour,
            requests: Mutex::new(Vec::new()),
            ids: Mutex::new(HashMap::new()),
            next_id: Mutex::new(0),
        };
        for email in &state.behaviour.existing_users {
            state.assign_id(email);
        }
        state
    }

    fn assign_id(&self, email: &str) -> String {
        let mut next = self.next_id.lock().expect("id counter lock");
        *next += 1;
        // Same shape as a Mongo ObjectId.
        let id = format!("{:024x}", *next);
        self.ids
            .lock()
            .expect("ids lock")
            .insert(email.to_owned(), id.clone());
        id
    }

    fn id_of(&self, email: &str) -> Option<String> {
        self.ids.lock().expect("ids lock").get(email).cloned()
    }

    fn knows_id(&self, id: &str) -> bool {
        self.ids.lock().expect("ids lock").values().any(|v| v == id)
    }

    fn record(&self, endpoint: Endpoint, request: &HttpRequest, body: &Value) {
        let authorization = request
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        self.requests
            .lock()
            .expect("requests lock")
            .push(RecordedRequest {
                endpoint,
                authorization,
                body: body.clone(),
            });
    }
}

fn email_of(body: &Value) -> String {
    body.get("email")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

async fn create_user(
    state: web::Data<StubState>,
    request: HttpRequest,
    body: web::Json<Value>,
) -> HttpResponse {
    state.record(Endpoint::CreateUser, &request, &body);
    let email = email_of(&body);
    if state.behaviour.reject_creation.contains(&email) {
        return HttpResponse::InternalServerError().json(json!({"message": "Error creating user"}));
    }
    if state.id_of(&email).is_some() {
        return HttpResponse::BadRequest().json(json!({"message": "Email already exists"}));
    }
    let id = state.assign_id(&email);
    HttpResponse::Created().json(json!({
        "_id": id,
        "name": body.get("name"),
        "email": email,
        "picture": body.get("picture"),
        "videos": [],
        "__v": 0,
    }))
}

async fn login(
    state: web::Data<StubState>,
    request: HttpRequest,
    body: web::Json<Value>,
) -> HttpResponse {
    state.record(Endpoint::Login, &request, &body);
    let email = email_of(&body);
    let Some(id) = state.id_of(&email) else {
        return HttpResponse::NotFound().json(json!({"message": "User not found"}));
    };
    if state.behaviour.reject_login.contains(&email) {
        return HttpResponse::BadRequest().json(json!({"message": "Invalid password"}));
    }
    HttpResponse::Ok().json(json!({
        "message": "Login successful",
        "token": format!("token-{id}"),
        "userId": id,
    }))
}

async fn attach_video(
    state: web::Data<StubState>,
    path: web::Path<String>,
    request: HttpRequest,
    body: web::Json<Value>,
) -> HttpResponse {
    let user_id = path.into_inner();
    state.record(
        Endpoint::AttachVideo {
            user_id: user_id.clone(),
        },
        &request,
        &body,
    );
    let has_bearer = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("Bearer "));
    if !has_bearer {
        return HttpResponse::Unauthorized()
            .json(json!({"message": "Access token is missing or invalid"}));
    }
    if !state.knows_id(&user_id) {
        return HttpResponse::NotFound().json(json!({"message": "User not found"}));
    }
    HttpResponse::Created().json(json!({
        "_id": format!("video-{user_id}"),
        "title": body.get("title"),
        "url": body.get("url"),
        "description": body.get("description"),
        "views": 0,
    }))
}

/// Running stub service bound to an ephemeral local port.
pub struct StubService {
    state: web::Data<StubState>,
    addr: SocketAddr,
    handle: ServerHandle,
}

impl StubService {
    /// Start the stub on the current actix runtime.
    ///
    /// # Errors
    ///
    /// Returns any error raised while binding the listener.
    pub fn start(behaviour: StubBehaviour) -> io::Result<Self> {
        let state = web::Data::new(StubState::new(behaviour));
        let app_state = state.clone();
        let server = HttpServer::new(move || {
            App::new().app_data(app_state.clone()).service(
                web::scope("/api")
                    .route("/users", web::post().to(create_user))
                    .route("/users/login", web::post().to(login))
                    .route("/users/{id}/videos", web::post().to(attach_video)),
            )
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))?;
        let addr = server
            .addrs()
            .first()
            .copied()
            .ok_or_else(|| io::Error::other("stub bound no address"))?;
        let running = server.run();
        let handle = running.handle();
        actix_rt::spawn(running);
        Ok(Self {
            state,
            addr,
            handle,
        })
    }

    /// API base URL, including the `/api` prefix.
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Every request observed so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().expect("requests lock").clone()
    }

    /// Requests that hit the attach-video endpoint.
    pub fn attach_requests(&self) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| matches!(r.endpoint, Endpoint::AttachVideo { .. }))
            .collect()
    }

    /// Number of requests that hit `endpoint`.
    pub fn count(&self, endpoint: &Endpoint) -> usize {
        self.requests()
            .iter()
            .filter(|r| &r.endpoint == endpoint)
            .count()
    }

    /// Identifier assigned to `email`, if the account exists.
    pub fn id_of(&self, email: &str) -> Option<String> {
        self.state.id_of(email)
    }

    /// Stop the server and wait for it to shut down.
    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}

use actix_web::dev::ServerHandle;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};

use crate::modules::project::application::domain::entities::{ProjectDraft, ProjectId};
use crate::tests::support::fake_backend::FakeBackend;

/// REST front for a [`FakeBackend`] on an ephemeral local port.
/// `GET {base}/garbage/projects` answers 200 with a body that is not JSON.
/// `GET {base}/mixed/projects` answers a list mixing good and broken records.
pub struct FakeServer {
    pub base_url: String,
    handle: ServerHandle,
}

impl FakeServer {
    /// Must be called from within an actix runtime (`#[actix_web::test]`).
    pub fn spawn(backend: FakeBackend) -> std::io::Result<Self> {
        let data = web::Data::new(backend);

        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .route("/api/projects", web::get().to(list_projects))
                .route("/api/projects", web::post().to(create_project))
                .route("/api/projects/{id}", web::put().to(update_project))
                .route("/api/projects/{id}", web::delete().to(delete_project))
                .route("/api/garbage/projects", web::get().to(garbage))
                .route("/api/mixed/projects", web::get().to(mixed))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))?;

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Ok(Self {
            base_url: format!("http://{}/api", addr),
            handle,
        })
    }

    pub async fn shutdown(self) {
        self.handle.stop(true).await;
    }
}

async fn list_projects(backend: web::Data<FakeBackend>) -> impl Responder {
    HttpResponse::Ok().json(backend.stored())
}

async fn create_project(
    backend: web::Data<FakeBackend>,
    body: web::Json<ProjectDraft>,
) -> impl Responder {
    let created = backend.insert(body.into_inner());
    HttpResponse::Created().json(created)
}

async fn update_project(
    backend: web::Data<FakeBackend>,
    path: web::Path<String>,
    body: web::Json<ProjectDraft>,
) -> impl Responder {
    let id = ProjectId::from(path.into_inner());
    match backend.replace(&id, body.into_inner()) {
        Some(updated) => HttpResponse::Ok().json(updated),
        None => HttpResponse::NotFound().body(format!("project {} not found", id)),
    }
}

async fn delete_project(backend: web::Data<FakeBackend>, path: web::Path<String>) -> impl Responder {
    let id = ProjectId::from(path.into_inner());
    if backend.remove(&id) {
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::NotFound().body(format!("project {} not found", id))
    }
}

async fn garbage() -> impl Responder {
    HttpResponse::Ok()
        .content_type("application/json")
        .body("<html>not json</html>")
}

/// Both id keys (as Mongoose emits with virtuals), a missing title, a
/// missing timestamp, a non-object, a missing id, then a plain record.
const MIXED_RECORDS: &str = r#"[
    {"_id": "mongo-1", "id": "virtual-1", "title": "Both keys", "link": "http://both", "createdAt": "2024-01-15T09:30:00Z"},
    {"id": "no-title", "link": "http://untitled", "createdAt": "2024-01-15T09:30:00Z"},
    {"id": "no-timestamp", "title": "Undated", "link": "http://undated"},
    42,
    {"title": "Anonymous", "link": "http://anon", "createdAt": "2024-01-15T09:30:00Z"},
    {"id": "4", "title": "Fine", "link": "http://fine", "createdAt": "2024-01-15T09:30:00Z"}
]"#;

async fn mixed() -> impl Responder {
    HttpResponse::Ok()
        .content_type("application/json")
        .body(MIXED_RECORDS)
}

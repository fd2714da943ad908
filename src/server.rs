use anyhow::{Context, Result};
use axum::{
    extract::{DefaultBodyLimit, Multipart},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer};

use crate::extract;
use crate::models::CourseRecord;
use crate::pdf;

const UPLOAD_LIMIT_BYTES: usize = 10 * 1024 * 1024;

struct AppError(StatusCode, String);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.0, Json(serde_json::json!({ "error": self.1 }))).into_response()
    }
}

fn bad_request(msg: impl Into<String>) -> AppError {
    AppError(StatusCode::BAD_REQUEST, msg.into())
}

fn internal_error(msg: impl Into<String>) -> AppError {
    AppError(StatusCode::INTERNAL_SERVER_ERROR, msg.into())
}

fn reject_upload(filename: &str) -> Option<&'static str> {
    if filename.is_empty() {
        Some("No selected file")
    } else if !filename.to_lowercase().ends_with(".pdf") {
        Some("File must be a PDF")
    } else {
        None
    }
}

#[derive(Serialize)]
struct ProcessPdfResponse {
    courses: Vec<CourseRecord>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

// POST /process-pdf, multipart field "pdf"
async fn process_pdf_handler(
    mut multipart: Multipart,
) -> Result<Json<ProcessPdfResponse>, AppError> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request(e.to_string()))?
    {
        if field.name() == Some("pdf") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| bad_request(e.to_string()))?;
            upload = Some((filename, bytes.to_vec()));
            break;
        }
    }

    let Some((filename, bytes)) = upload else {
        return Err(bad_request("No PDF file uploaded"));
    };
    if let Some(reason) = reject_upload(&filename) {
        return Err(bad_request(reason));
    }

    let text = pdf::document_text_from_bytes(&bytes).map_err(|e| internal_error(e.to_string()))?;
    let courses = extract::extract_registered_courses(&text);
    println!(
        "[POST /process-pdf] Extracted {} registered courses from {}",
        courses.len(),
        filename
    );
    Ok(Json(ProcessPdfResponse { courses }))
}

// GET /health
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn serve(bind: &str) -> Result<()> {
    let app = Router::new()
        .route("/process-pdf", post(process_pdf_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(UPLOAD_LIMIT_BYTES))
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind to {bind}"))?;
    println!("[Server] Listening on {bind}");
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

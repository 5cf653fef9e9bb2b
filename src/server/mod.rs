//! HTTP server for the portfolio site.
//!
//! # Endpoints
//!
//! - `GET  /health`                 — Liveness probe
//! - `POST /api/chatbot`, `/api/chat` — Chat assistant
//! - `POST /api/contact`            — Contact form

pub mod routes;
pub mod validation;

pub use routes::{app_router, ApiResponse, AppState};
pub use validation::{ChatRequest, ContactSubmission, FieldError, IssueCode};

//! HTTP surface for YAGA.
//!
//! Serves the static front end and the chord practice session endpoints:
//!
//! - `POST /exercise/chord-practice/start` → `{"session_id": "..."}`
//! - `GET /exercise/chord-practice/{session_id}/next` → `{"prompt": "..."}`
//!   or `{"message": "Exercise complete"}`
//!
//! Unknown and exhausted sessions get the same completion body with status
//! 200.

pub mod dto;
pub mod handler;
pub mod response;
pub mod routes;
pub mod server;
pub mod static_files;

pub use handler::RequestHandler;
pub use server::{ExerciseServer, ShutdownHandle};

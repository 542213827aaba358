// src/web/mod.rs
pub mod activity_handlers;
pub mod auth_handlers;
pub mod contact_handlers;
pub mod course_handlers;
pub mod enrollment_handlers;
pub mod quiz_handlers;
pub mod routes;
pub mod user_handlers;

// src/services/mod.rs
pub mod activity_service;
pub mod auth_service;
pub mod contact_service;
pub mod course_service;
pub mod enrollment_service;
pub mod quiz_service;
pub mod user_service;

// src/web/routes.rs
use crate::{
    state::AppState,
    web::{
        activity_handlers, auth_handlers, contact_handlers, course_handlers, enrollment_handlers,
        quiz_handlers, user_handlers,
    },
};
use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub fn create_router(app_state: AppState) -> Router {
    // --- Autenticação --- (sem sessão: o login devolve o utilizador)
    let auth_routes = Router::new()
        .route("/register", post(auth_handlers::handle_register))
        .route("/login", post(auth_handlers::handle_login));

    // --- Utilizadores ---
    let user_routes = Router::new()
        .route("/", get(user_handlers::list_users).post(user_handlers::create_user))
        .route("/register", post(auth_handlers::handle_register))
        .route("/check-email", get(user_handlers::check_email))
        // Rota antiga do painel de admin
        .route(
            "/approve/{id}",
            put(user_handlers::approve_user).post(user_handlers::approve_user),
        )
        .route(
            "/{id}",
            get(user_handlers::get_user)
                .put(user_handlers::update_user)
                .delete(user_handlers::delete_user),
        )
        .route(
            "/{id}/approve",
            put(user_handlers::approve_user).post(user_handlers::approve_user),
        )
        .route("/{id}/reject", put(user_handlers::reject_user))
        .route("/{id}/status", put(user_handlers::update_status))
        .route("/{id}/activate", post(user_handlers::activate_user));

    // --- Cursos ---
    let course_routes = Router::new()
        .route("/", get(course_handlers::list_courses).post(course_handlers::create_course))
        .route("/educator/{id}", get(course_handlers::list_courses_by_educator))
        .route(
            "/{id}",
            get(course_handlers::get_course)
                .put(course_handlers::update_course)
                .delete(course_handlers::delete_course),
        );

    // --- Inscrições ---
    // O mesmo nome de parâmetro ({id}) na mesma posição, senão o router recusa
    let enrollment_routes = Router::new()
        .route("/", get(enrollment_handlers::list_enrollments).post(enrollment_handlers::enroll))
        .route("/progress", put(enrollment_handlers::update_progress))
        .route("/user/{id}", get(enrollment_handlers::list_by_user))
        .route("/course/{id}", get(enrollment_handlers::list_by_course))
        .route("/by-id/{id}", delete(enrollment_handlers::unenroll_by_id))
        .route(
            "/{id}",
            get(enrollment_handlers::get_enrollment).delete(enrollment_handlers::unenroll_by_id),
        )
        .route(
            "/{id}/{course_id}",
            delete(enrollment_handlers::unenroll_by_user_and_course),
        );

    // --- Quizzes ---
    let quiz_routes = Router::new()
        .route("/results", get(quiz_handlers::list_results).post(quiz_handlers::save_result))
        .route("/results/user/{id}", get(quiz_handlers::list_results_by_user))
        .route("/results/course/{id}", get(quiz_handlers::list_results_by_course))
        .route(
            "/results/{id}",
            get(quiz_handlers::get_result)
                .put(quiz_handlers::update_result)
                .delete(quiz_handlers::delete_result),
        )
        .route("/questions", post(quiz_handlers::create_question))
        .route("/questions/{id}", get(quiz_handlers::list_questions));

    // --- Atividade ---
    let activity_routes = Router::new()
        .route("/user/{id}", get(activity_handlers::user_activity))
        .route("/system", get(activity_handlers::system_activity))
        .route("/study-hours/{id}", get(activity_handlers::study_hours))
        .route("/log", post(activity_handlers::log_activity));

    // --- Contacto ---
    let contact_routes = Router::new().route(
        "/",
        post(contact_handlers::submit_contact).get(contact_handlers::list_contact_messages),
    );

    let api_routes = Router::new()
        .nest("/auth", auth_routes)
        .nest("/users", user_routes)
        .nest("/courses", course_routes)
        .nest("/enrollments", enrollment_routes)
        .nest("/quizzes", quiz_routes)
        .nest("/activity", activity_routes)
        .nest("/contact", contact_routes);

    // --- Router Final ---
    Router::new()
        .nest("/api", api_routes)
        .with_state(app_state)
}

// src/web/quiz_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::{
        quiz::{QuizQuestion, QuizQuestionRequest, QuizResult, QuizResultRequest, ScoreUpdateRequest},
        required, MessageResponse,
    },
    services::quiz_service,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};

fn check_score(score: i64) -> AppResult<()> {
    if (0..=100).contains(&score) {
        Ok(())
    } else {
        Err(AppError::bad_request("Score must be between 0 and 100"))
    }
}

// POST /api/quizzes/results
pub async fn save_result(
    State(state): State<AppState>,
    Json(request): Json<QuizResultRequest>,
) -> AppResult<Json<MessageResponse>> {
    if request.user_id <= 0 || request.course_id <= 0 {
        return Err(AppError::bad_request("userId and courseId are required"));
    }
    check_score(request.score)?;
    let id = quiz_service::save_result(&state.db_pool, request.user_id, request.course_id, request.score).await?;
    Ok(Json(MessageResponse::created("Quiz result saved successfully", id)))
}

// GET /api/quizzes/results
pub async fn list_results(State(state): State<AppState>) -> AppResult<Json<Vec<QuizResult>>> {
    Ok(Json(quiz_service::find_all_results(&state.db_pool).await?))
}

// GET /api/quizzes/results/{id}
pub async fn get_result(
    State(state): State<AppState>,
    Path(quiz_result_id): Path<i64>,
) -> AppResult<Json<QuizResult>> {
    let result = quiz_service::find_result_by_id(&state.db_pool, quiz_result_id)
        .await?
        .ok_or(AppError::NotFound("Quiz result"))?;
    Ok(Json(result))
}

// PUT /api/quizzes/results/{id}
pub async fn update_result(
    State(state): State<AppState>,
    Path(quiz_result_id): Path<i64>,
    Json(request): Json<ScoreUpdateRequest>,
) -> AppResult<Json<MessageResponse>> {
    check_score(request.score)?;
    quiz_service::update_score(&state.db_pool, quiz_result_id, request.score).await?;
    Ok(Json(MessageResponse::new("Quiz result updated successfully")))
}

// DELETE /api/quizzes/results/{id}
pub async fn delete_result(
    State(state): State<AppState>,
    Path(quiz_result_id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    quiz_service::delete_result(&state.db_pool, quiz_result_id).await?;
    Ok(Json(MessageResponse::new("Quiz result deleted successfully")))
}

// GET /api/quizzes/results/user/{user_id}
pub async fn list_results_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<Vec<QuizResult>>> {
    Ok(Json(quiz_service::find_results_by_user(&state.db_pool, user_id).await?))
}

// GET /api/quizzes/results/course/{course_id}
pub async fn list_results_by_course(
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
) -> AppResult<Json<Vec<QuizResult>>> {
    Ok(Json(quiz_service::find_results_by_course(&state.db_pool, course_id).await?))
}

// GET /api/quizzes/questions/{course_id}
pub async fn list_questions(
    State(state): State<AppState>,
    Path(course_id): Path<i64>,
) -> AppResult<Json<Vec<QuizQuestion>>> {
    Ok(Json(quiz_service::find_questions_by_course(&state.db_pool, course_id).await?))
}

// POST /api/quizzes/questions
pub async fn create_question(
    State(state): State<AppState>,
    Json(request): Json<QuizQuestionRequest>,
) -> AppResult<Json<MessageResponse>> {
    if request.course_id <= 0 {
        return Err(AppError::bad_request("courseId is required"));
    }
    let question = required(&request.question).ok_or_else(|| AppError::bad_request("Question is required"))?;
    let options: [String; 4] = request
        .options
        .try_into()
        .map_err(|_| AppError::bad_request("Exactly four options are required"))?;
    if !(0..=3).contains(&request.correct_answer) {
        return Err(AppError::bad_request("correctAnswer must be between 0 and 3"));
    }

    let id = quiz_service::create_question(
        &state.db_pool,
        request.course_id,
        question,
        &options,
        request.correct_answer,
    )
    .await?;
    Ok(Json(MessageResponse::created("Question created successfully", id)))
}

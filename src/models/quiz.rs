// src/models/quiz.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub quiz_result_id: i64,
    pub user_id: i64,
    pub course_id: i64,
    pub score: i64,
    pub date: NaiveDateTime,
}

// Linha da tabela 'quiz_questions' (quatro colunas de opções)
#[derive(Debug, Clone, FromRow)]
pub struct QuizQuestionRow {
    pub question_id: i64,
    pub course_id: i64,
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_answer: i64,
}

/// Pergunta como a API a devolve: opções num array.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question_id: i64,
    pub course_id: i64,
    pub question: String,
    pub options: [String; 4],
    pub correct_answer: i64,
}

impl From<QuizQuestionRow> for QuizQuestion {
    fn from(row: QuizQuestionRow) -> Self {
        Self {
            question_id: row.question_id,
            course_id: row.course_id,
            question: row.question,
            options: [row.option_a, row.option_b, row.option_c, row.option_d],
            correct_answer: row.correct_answer,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizResultRequest {
    #[serde(alias = "UserId")]
    pub user_id: i64,
    #[serde(alias = "CourseId")]
    pub course_id: i64,
    #[serde(alias = "Score")]
    pub score: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreUpdateRequest {
    #[serde(alias = "Score")]
    pub score: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizQuestionRequest {
    #[serde(alias = "CourseId")]
    pub course_id: i64,
    #[serde(alias = "Question")]
    pub question: Option<String>,
    #[serde(alias = "Options")]
    pub options: Vec<String>,
    #[serde(alias = "CorrectAnswer")]
    pub correct_answer: i64,
}

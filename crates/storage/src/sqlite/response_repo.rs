use quiz_core::model::{Persona, ResponseId, SurveyResponse};
use sqlx::Row;

use super::SqliteRepository;
use crate::repository::{ResponseRepository, ResponseRow, StorageError};

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

fn map_response_row(row: &sqlx::sqlite::SqliteRow) -> Result<SurveyResponse, StorageError> {
    let response_id: ResponseId = row
        .try_get::<String, _>("response_id")
        .map_err(ser)?
        .parse()
        .map_err(ser)?;
    let submitted_at = row.try_get("submitted_at").map_err(ser)?;
    let name: String = row.try_get("name").map_err(ser)?;
    let email: String = row.try_get("email").map_err(ser)?;
    let persona =
        Persona::from_label(row.try_get::<String, _>("result_group").map_err(ser)?.as_str())
            .map_err(ser)?;

    SurveyResponse::from_persisted(response_id, submitted_at, name, email, persona).map_err(ser)
}

fn map_response_row_with_id(row: &sqlx::sqlite::SqliteRow) -> Result<ResponseRow, StorageError> {
    let id: i64 = row.try_get("id").map_err(ser)?;
    let response = map_response_row(row)?;
    Ok(ResponseRow::new(id, response))
}

fn map_insert_error(e: sqlx::Error) -> StorageError {
    if e.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
    {
        StorageError::Conflict
    } else {
        StorageError::Connection(e.to_string())
    }
}

#[async_trait::async_trait]
impl ResponseRepository for SqliteRepository {
    async fn append_response(&self, response: &SurveyResponse) -> Result<i64, StorageError> {
        let res = sqlx::query(
            r"
                INSERT INTO survey_responses (
                    response_id, submitted_at, name, email, result_group
                )
                VALUES (?1, ?2, ?3, ?4, ?5)
            ",
        )
        .bind(response.response_id().to_string())
        .bind(response.submitted_at())
        .bind(response.name())
        .bind(response.email())
        .bind(response.persona().label())
        .execute(&self.pool)
        .await
        .map_err(map_insert_error)?;

        let id = res.last_insert_rowid();
        log::debug!("appended survey response {} as row {id}", response.response_id());
        Ok(id)
    }

    async fn get_response(&self, id: i64) -> Result<SurveyResponse, StorageError> {
        let row = sqlx::query(
            r"
                SELECT response_id, submitted_at, name, email, result_group
                FROM survey_responses
                WHERE id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?
        .ok_or(StorageError::NotFound)?;

        map_response_row(&row)
    }

    async fn list_recent(&self, limit: u32) -> Result<Vec<ResponseRow>, StorageError> {
        let rows = sqlx::query(
            r"
                SELECT id, response_id, submitted_at, name, email, result_group
                FROM survey_responses
                ORDER BY submitted_at DESC, id DESC
                LIMIT ?1
            ",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(map_response_row_with_id(&row)?);
        }

        Ok(out)
    }
}

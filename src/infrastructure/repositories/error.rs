use crate::domain::errors::DomainError;

const CNT_REVISION_SUBJECT_TYPE: &str = "revisions_subject_type_not_blank_chk";
const CNT_REVISION_KEY: &str = "revisions_key_not_blank_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_REVISION_SUBJECT_TYPE => {
                        DomainError::Validation("subject type cannot be empty".into())
                    }
                    CNT_REVISION_KEY => DomainError::Validation("field key cannot be empty".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    "42P01" => {
                        return DomainError::UnknownType(db_err.message().to_string());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

//! Whitelist-driven partial updates.
//!
//! Editable resources (alumnos, docentes) accept partial JSON bodies where
//! any subset of the whitelisted columns may appear. Each resource declares
//! its whitelist as a static `[FieldSpec]` table; [`project`] walks the table
//! against the body and produces typed bind values, and
//! [`apply_partial_update`] turns them into a single
//! `UPDATE ... RETURNING *` statement.
//!
//! Normalization happens during projection, per field kind:
//! - empty or whitespace-only strings become SQL NULL,
//! - date fields truncate ISO-8601 datetime strings to their date part,
//! - numeric fields accept JSON numbers or numeric strings (forms often
//!   submit numbers as strings).

use chrono::NaiveDate;
use serde_json::{Map, Value};
use sqlx::{PgConnection, Postgres, QueryBuilder};
use thiserror::Error;

use crate::db::errors::Result;

/// How a whitelisted column interprets and binds its JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    Int,
    Float,
}

/// One editable column of a resource.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub column: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn text(column: &'static str) -> Self {
        Self {
            column,
            kind: FieldKind::Text,
        }
    }

    pub const fn date(column: &'static str) -> Self {
        Self {
            column,
            kind: FieldKind::Date,
        }
    }

    pub const fn int(column: &'static str) -> Self {
        Self {
            column,
            kind: FieldKind::Int,
        }
    }

    pub const fn float(column: &'static str) -> Self {
        Self {
            column,
            kind: FieldKind::Float,
        }
    }
}

/// A normalized value ready to bind, carrying its SQL type.
#[derive(Debug, Clone, PartialEq)]
pub enum Bound {
    Text(Option<String>),
    Date(Option<NaiveDate>),
    Int(Option<i32>),
    Float(Option<f64>),
}

/// Rejections produced while projecting a request body onto a whitelist.
/// These are client errors; the API layer maps them to 400 responses.
#[derive(Error, Debug, PartialEq)]
pub enum ProjectionError {
    #[error("Sin datos para actualizar")]
    Empty,

    #[error("Valor de fecha inválido para '{column}': {value}")]
    InvalidDate { column: &'static str, value: String },

    #[error("Valor numérico inválido para '{column}': {value}")]
    InvalidNumber { column: &'static str, value: String },
}

/// Select the whitelisted fields present in `body` and normalize their
/// values. Fields absent from the body are skipped; an explicit JSON null
/// clears the column. Fails with [`ProjectionError::Empty`] when nothing
/// matched, before any statement is built.
pub fn project(specs: &'static [FieldSpec], body: &Map<String, Value>) -> std::result::Result<Vec<(&'static str, Bound)>, ProjectionError> {
    let mut assignments = Vec::new();

    for spec in specs {
        let Some(value) = body.get(spec.column) else {
            continue;
        };
        assignments.push((spec.column, normalize(spec, value)?));
    }

    if assignments.is_empty() {
        return Err(ProjectionError::Empty);
    }
    Ok(assignments)
}

fn normalize(spec: &FieldSpec, value: &Value) -> std::result::Result<Bound, ProjectionError> {
    match spec.kind {
        FieldKind::Text => Ok(Bound::Text(match value {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s.clone()),
            // Forms occasionally submit numbers for text columns (e.g. cp)
            other => Some(other.to_string()),
        })),
        FieldKind::Date => match value {
            Value::Null => Ok(Bound::Date(None)),
            Value::String(s) => {
                // ISO datetime strings carry the date before the 'T'
                let date_part = s.split('T').next().unwrap_or("").trim();
                if date_part.is_empty() {
                    return Ok(Bound::Date(None));
                }
                NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
                    .map(|d| Bound::Date(Some(d)))
                    .map_err(|_| ProjectionError::InvalidDate {
                        column: spec.column,
                        value: s.clone(),
                    })
            }
            other => Err(ProjectionError::InvalidDate {
                column: spec.column,
                value: other.to_string(),
            }),
        },
        FieldKind::Int => match value {
            Value::Null => Ok(Bound::Int(None)),
            Value::Number(n) => n
                .as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .map(|v| Bound::Int(Some(v)))
                .ok_or_else(|| ProjectionError::InvalidNumber {
                    column: spec.column,
                    value: n.to_string(),
                }),
            Value::String(s) if s.trim().is_empty() => Ok(Bound::Int(None)),
            Value::String(s) => s.trim().parse::<i32>().map(|v| Bound::Int(Some(v))).map_err(|_| ProjectionError::InvalidNumber {
                column: spec.column,
                value: s.clone(),
            }),
            other => Err(ProjectionError::InvalidNumber {
                column: spec.column,
                value: other.to_string(),
            }),
        },
        FieldKind::Float => match value {
            Value::Null => Ok(Bound::Float(None)),
            Value::Number(n) => n.as_f64().map(|v| Bound::Float(Some(v))).ok_or_else(|| ProjectionError::InvalidNumber {
                column: spec.column,
                value: n.to_string(),
            }),
            Value::String(s) if s.trim().is_empty() => Ok(Bound::Float(None)),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .map(|v| Bound::Float(Some(v)))
                .map_err(|_| ProjectionError::InvalidNumber {
                    column: spec.column,
                    value: s.clone(),
                }),
            other => Err(ProjectionError::InvalidNumber {
                column: spec.column,
                value: other.to_string(),
            }),
        },
    }
}

/// Execute `UPDATE <table> SET <assignments> WHERE id = $n RETURNING *`.
/// Returns `None` when no row matched the identifier.
pub async fn apply_partial_update<T>(db: &mut PgConnection, table: &str, assignments: Vec<(&'static str, Bound)>, id: i32) -> Result<Option<T>>
where
    T: for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> + Send + Unpin,
{
    let mut query = QueryBuilder::<Postgres>::new(format!("UPDATE {table} SET "));

    let mut separated = query.separated(", ");
    for (column, bound) in assignments {
        separated.push(column);
        separated.push_unseparated(" = ");
        match bound {
            Bound::Text(v) => separated.push_bind_unseparated(v),
            Bound::Date(v) => separated.push_bind_unseparated(v),
            Bound::Int(v) => separated.push_bind_unseparated(v),
            Bound::Float(v) => separated.push_bind_unseparated(v),
        };
    }

    query.push(" WHERE id = ");
    query.push_bind(id);
    query.push(" RETURNING *");

    let row = query.build_query_as::<T>().fetch_optional(db).await?;
    Ok(row)
}

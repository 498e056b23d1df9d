//! Column-to-field mapping for query results.
//!
//! An [`Entity`] declares its fields once as a table of name, SQL type and
//! setter. [`extract`] walks that table for a result row: each field name is
//! turned into a column name with [`camel_to_snake`], columns the query did
//! not return are skipped, NULLs are skipped, and everything else is coerced
//! to the declared type before the setter runs.
//!
//! The write side uses the same closed type set: [`param`] turns an optional
//! field value into a [`Param`] that binds as a typed value or SQL NULL.
//!
//! ```rust,no_run
//! use projects::db::mapper::{assign, Entity, Field, SqlType};
//!
//! #[derive(Default)]
//! struct Tool {
//!     tool_id: Option<i32>,
//!     tool_name: Option<String>,
//! }
//!
//! impl Entity for Tool {
//!     const ENTITY_NAME: &'static str = "Tool";
//!
//!     fn fields() -> Vec<Field<Self>> {
//!         vec![
//!             Field::new("toolId", SqlType::Integer, |t, v| assign(&mut t.tool_id, v)),
//!             Field::new("toolName", SqlType::Text, |t, v| assign(&mut t.tool_name, v)),
//!         ]
//!     }
//! }
//! ```

use super::error::{DbError, Result};
use chrono::{NaiveDateTime, NaiveTime};
use rusqlite::types::{FromSql, ToSql, ToSqlOutput, Value, ValueRef};
use rusqlite::{Row, Statement};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Column types the mapper knows how to read and bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Integer,
    Text,
    Double,
    Decimal,
    Time,
    Timestamp,
}

/// A non-NULL value of one of the supported [`SqlType`]s.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Integer(i64),
    Text(String),
    Double(f64),
    Decimal(Decimal),
    Time(NaiveTime),
    Timestamp(NaiveDateTime),
}

impl SqlValue {
    pub fn sql_type(&self) -> SqlType {
        match self {
            SqlValue::Integer(_) => SqlType::Integer,
            SqlValue::Text(_) => SqlType::Text,
            SqlValue::Double(_) => SqlType::Double,
            SqlValue::Decimal(_) => SqlType::Decimal,
            SqlValue::Time(_) => SqlType::Time,
            SqlValue::Timestamp(_) => SqlType::Timestamp,
        }
    }
}

/// Rust types that can live in an entity field.
pub trait SqlField: Sized {
    const SQL_TYPE: SqlType;

    fn into_sql(self) -> SqlValue;

    /// Returns `None` when `value` holds a different kind (or does not fit).
    fn from_sql(value: SqlValue) -> Option<Self>;
}

impl SqlField for i32 {
    const SQL_TYPE: SqlType = SqlType::Integer;

    fn into_sql(self) -> SqlValue {
        SqlValue::Integer(self.into())
    }

    fn from_sql(value: SqlValue) -> Option<Self> {
        match value {
            SqlValue::Integer(v) => i32::try_from(v).ok(),
            _ => None,
        }
    }
}

impl SqlField for i64 {
    const SQL_TYPE: SqlType = SqlType::Integer;

    fn into_sql(self) -> SqlValue {
        SqlValue::Integer(self)
    }

    fn from_sql(value: SqlValue) -> Option<Self> {
        match value {
            SqlValue::Integer(v) => Some(v),
            _ => None,
        }
    }
}

impl SqlField for String {
    const SQL_TYPE: SqlType = SqlType::Text;

    fn into_sql(self) -> SqlValue {
        SqlValue::Text(self)
    }

    fn from_sql(value: SqlValue) -> Option<Self> {
        match value {
            SqlValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl SqlField for f64 {
    const SQL_TYPE: SqlType = SqlType::Double;

    fn into_sql(self) -> SqlValue {
        SqlValue::Double(self)
    }

    fn from_sql(value: SqlValue) -> Option<Self> {
        match value {
            SqlValue::Double(v) => Some(v),
            _ => None,
        }
    }
}

impl SqlField for Decimal {
    const SQL_TYPE: SqlType = SqlType::Decimal;

    fn into_sql(self) -> SqlValue {
        SqlValue::Decimal(self)
    }

    fn from_sql(value: SqlValue) -> Option<Self> {
        match value {
            SqlValue::Decimal(v) => Some(v),
            _ => None,
        }
    }
}

impl SqlField for NaiveTime {
    const SQL_TYPE: SqlType = SqlType::Time;

    fn into_sql(self) -> SqlValue {
        SqlValue::Time(self)
    }

    fn from_sql(value: SqlValue) -> Option<Self> {
        match value {
            SqlValue::Time(v) => Some(v),
            _ => None,
        }
    }
}

impl SqlField for NaiveDateTime {
    const SQL_TYPE: SqlType = SqlType::Timestamp;

    fn into_sql(self) -> SqlValue {
        SqlValue::Timestamp(self)
    }

    fn from_sql(value: SqlValue) -> Option<Self> {
        match value {
            SqlValue::Timestamp(v) => Some(v),
            _ => None,
        }
    }
}

/// Setter used by an entity's field table; `false` means the value kind did
/// not match the field.
pub type Setter<T> = fn(&mut T, SqlValue) -> bool;

/// One mapped field: its camelCase name, declared type and setter.
pub struct Field<T> {
    pub name: &'static str,
    pub sql_type: SqlType,
    pub set: Setter<T>,
}

impl<T> Field<T> {
    pub fn new(name: &'static str, sql_type: SqlType, set: Setter<T>) -> Self {
        Self { name, sql_type, set }
    }

    pub fn column(&self) -> String {
        camel_to_snake(self.name)
    }
}

/// A struct that can be populated from a result row.
///
/// `Default` provides the instance whose fields stay unset when a column is
/// missing or NULL.
pub trait Entity: Default {
    const ENTITY_NAME: &'static str;

    fn fields() -> Vec<Field<Self>>;
}

/// Stores `value` into an optional field if the kinds match.
pub fn assign<F: SqlField>(slot: &mut Option<F>, value: SqlValue) -> bool {
    match F::from_sql(value) {
        Some(v) => {
            *slot = Some(v);
            true
        }
        None => false,
    }
}

/// `projectName` -> `project_name`.
pub fn camel_to_snake(identifier: &str) -> String {
    let mut name = String::with_capacity(identifier.len() + 4);

    for ch in identifier.chars() {
        if ch.is_uppercase() {
            name.push('_');
            name.extend(ch.to_lowercase());
        } else {
            name.push(ch);
        }
    }

    name
}

/// Builds one `T` from the current row.
pub fn extract<T: Entity>(row: &Row<'_>) -> Result<T> {
    let mut entity = T::default();
    let stmt: &Statement<'_> = row.as_ref();

    for field in T::fields() {
        let column = field.column();

        // Columns the query did not select leave the field unset.
        let Ok(index) = stmt.column_index(&column) else {
            continue;
        };

        let raw = row.get_ref(index)?;
        let value = coerce(raw, field.sql_type).map_err(|reason| DbError::Mapping {
            entity: T::ENTITY_NAME,
            reason: format!("column '{}': {}", column, reason),
        })?;

        let Some(value) = value else {
            continue;
        };

        if !(field.set)(&mut entity, value) {
            return Err(DbError::Mapping {
                entity: T::ENTITY_NAME,
                reason: format!("field '{}' cannot hold a {:?} value", field.name, field.sql_type),
            });
        }
    }

    Ok(entity)
}

/// Converts a raw SQLite value to `sql_type`; `Ok(None)` for NULL.
fn coerce(raw: ValueRef<'_>, sql_type: SqlType) -> std::result::Result<Option<SqlValue>, String> {
    if raw == ValueRef::Null {
        return Ok(None);
    }

    let value = match sql_type {
        SqlType::Integer => SqlValue::Integer(i64::column_result(raw).map_err(|e| e.to_string())?),
        SqlType::Text => SqlValue::Text(String::column_result(raw).map_err(|e| e.to_string())?),
        SqlType::Double => SqlValue::Double(f64::column_result(raw).map_err(|e| e.to_string())?),
        SqlType::Decimal => SqlValue::Decimal(decimal_from(raw)?),
        SqlType::Time => SqlValue::Time(NaiveTime::column_result(raw).map_err(|e| e.to_string())?),
        SqlType::Timestamp => SqlValue::Timestamp(NaiveDateTime::column_result(raw).map_err(|e| e.to_string())?),
    };

    Ok(Some(value))
}

fn decimal_from(raw: ValueRef<'_>) -> std::result::Result<Decimal, String> {
    match raw {
        ValueRef::Integer(v) => Ok(Decimal::from(v)),
        ValueRef::Real(v) => Decimal::try_from(v).map_err(|e| e.to_string()),
        ValueRef::Text(bytes) => {
            let text = std::str::from_utf8(bytes).map_err(|e| e.to_string())?;
            Decimal::from_str(text.trim()).map_err(|e| format!("'{}' is not a decimal: {}", text, e))
        }
        other => Err(format!("{:?} cannot be read as a decimal", other.data_type())),
    }
}

/// A positional statement parameter.
///
/// `sql_type` is kept even for NULLs so logs show what the slot expects.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub sql_type: SqlType,
    pub value: Option<SqlValue>,
}

pub fn param<T: SqlField>(value: Option<T>) -> Param {
    Param {
        sql_type: T::SQL_TYPE,
        value: value.map(SqlField::into_sql),
    }
}

impl ToSql for Param {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match &self.value {
            None => Ok(ToSqlOutput::Owned(Value::Null)),
            Some(value) => value.to_sql(),
        }
    }
}

impl ToSql for SqlValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            SqlValue::Integer(v) => Ok(ToSqlOutput::from(*v)),
            SqlValue::Text(v) => Ok(ToSqlOutput::from(v.as_str())),
            SqlValue::Double(v) => Ok(ToSqlOutput::from(*v)),
            // Text keeps the scale (12.50 stays 12.50).
            SqlValue::Decimal(v) => Ok(ToSqlOutput::from(v.to_string())),
            SqlValue::Time(v) => v.to_sql(),
            SqlValue::Timestamp(v) => v.to_sql(),
        }
    }
}

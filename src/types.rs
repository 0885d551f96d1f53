use std::str::FromStr;

use strum_macros::{Display, EnumString};

/// Scalar types that can appear as the second word of a column declaration.
///
/// Matching is exact and case-sensitive: `U64` or `String` are not part of the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ScalarType {
    U8,
    U16,
    U32,
    U64,
    I32,
    I64,
    F64,
    String,
    Bool,
    Timestamp,
    Duration,
    Bytes,
    #[strum(serialize = "bytes[8]")]
    Bytes8,
    #[strum(serialize = "bytes[16]")]
    Bytes16,
}

/// DuckDB column types emitted by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum SqlType {
    Utinyint,
    Usmallint,
    Uinteger,
    Ubigint,
    Uhugeint,
    Integer,
    Bigint,
    Double,
    Varchar,
    Boolean,
    Timestamp,
    Interval,
    Blob,
}

impl From<ScalarType> for SqlType {
    fn from(scalar_type: ScalarType) -> Self {
        match scalar_type {
            ScalarType::U8 => SqlType::Utinyint,
            ScalarType::U16 => SqlType::Usmallint,
            ScalarType::U32 => SqlType::Uinteger,
            ScalarType::U64 => SqlType::Uhugeint,
            ScalarType::I32 => SqlType::Integer,
            ScalarType::I64 => SqlType::Bigint,
            ScalarType::F64 => SqlType::Double,
            ScalarType::String => SqlType::Varchar,
            ScalarType::Bool => SqlType::Boolean,
            ScalarType::Timestamp => SqlType::Timestamp,
            ScalarType::Duration => SqlType::Interval,
            ScalarType::Bytes => SqlType::Blob,
            // fixed-width ids are stored as unsigned integers of the same width
            ScalarType::Bytes8 => SqlType::Ubigint,
            ScalarType::Bytes16 => SqlType::Uhugeint,
        }
    }
}

/// Maps a diagram type token to its DuckDB type, falling back to `VARCHAR`.
pub fn map_type(token: &str) -> SqlType {
    match ScalarType::from_str(token) {
        Ok(scalar_type) => scalar_type.into(),
        Err(_) => {
            log::debug!("Unknown type `{}`, falling back to {}", token, SqlType::Varchar);
            SqlType::Varchar
        }
    }
}

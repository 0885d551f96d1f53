use std::fmt::Display;

use crate::parser::{Table, Tables};
use crate::types::{SqlType, map_type};

pub const OPTIONAL_MARKER: &str = "optional";
const INDENT: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub sql_type: SqlType,
    pub nullable: bool,
}

impl Column {
    /// Builds a column from a raw declaration such as `created_at timestamp optional`.
    ///
    /// Returns `None` when the declaration has fewer than two words.
    /// The column is nullable whenever `optional` appears anywhere in the declaration.
    pub fn from_declaration(declaration: &str) -> Option<Self> {
        let mut words = declaration.split_whitespace();
        let (Some(name), Some(type_token)) = (words.next(), words.next()) else {
            log::debug!("Skipping invalid column declaration `{}`", declaration);
            return None;
        };
        Some(Column {
            name: name.to_owned(),
            sql_type: map_type(type_token),
            nullable: declaration.contains(OPTIONAL_MARKER),
        })
    }
}

impl Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" {}", self.name, self.sql_type)?;
        if !self.nullable {
            write!(f, " NOT NULL")?;
        }
        Ok(())
    }
}

pub fn create_table(table: &Table) -> String {
    let columns = table
        .declarations
        .iter()
        .filter_map(|declaration| Column::from_declaration(declaration))
        .map(|column| column.to_string())
        .collect::<Vec<String>>()
        .join(&format!(",\n{}", INDENT));
    format!("CREATE TABLE {} (\n{}{}\n);", table.name, INDENT, columns)
}

/// Renders one `CREATE TABLE` statement per table, separated by a blank line.
pub fn generate_ddl(tables: &Tables) -> String {
    tables
        .values()
        .map(create_table)
        .collect::<Vec<String>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(name: &str, declarations: &[&str]) -> Table {
        Table {
            name: name.to_owned(),
            declarations: declarations.iter().map(|d| d.to_string()).collect(),
        }
    }

    #[test]
    fn test_column_from_declaration() {
        assert_eq!(
            Column::from_declaration("id u64"),
            Some(Column {
                name: "id".to_owned(),
                sql_type: SqlType::Uhugeint,
                nullable: false,
            })
        );
        assert_eq!(
            Column::from_declaration("age i32 optional"),
            Some(Column {
                name: "age".to_owned(),
                sql_type: SqlType::Integer,
                nullable: true,
            })
        );
        assert_eq!(Column::from_declaration("bad"), None);
        assert_eq!(Column::from_declaration("   "), None);
    }

    #[test]
    fn test_optional_anywhere_in_declaration() {
        let column = Column::from_declaration("note string \"not optional at all\"").unwrap();
        assert!(column.nullable);
        let column = Column::from_declaration("optional_flag bool").unwrap();
        assert!(column.nullable);
        let column = Column::from_declaration("flag bool Optional").unwrap();
        assert!(!column.nullable);
    }

    #[test]
    fn test_column_clause() {
        assert_eq!(
            Column::from_declaration("age i32 optional").unwrap().to_string(),
            "\"age\" INTEGER"
        );
        assert_eq!(
            Column::from_declaration("trace_id bytes[16]").unwrap().to_string(),
            "\"trace_id\" UHUGEINT NOT NULL"
        );
        assert_eq!(
            Column::from_declaration("kind SpanKind").unwrap().to_string(),
            "\"kind\" VARCHAR NOT NULL"
        );
    }

    #[test]
    fn test_create_table() {
        assert_eq!(
            create_table(&table("Table", &["id u64", "name string"])),
            "CREATE TABLE Table (\n    \"id\" UHUGEINT NOT NULL,\n    \"name\" VARCHAR NOT NULL\n);"
        );
    }

    #[test]
    fn test_create_table_skips_invalid_declarations() {
        assert_eq!(
            create_table(&table("T", &["bad", "id u64", "x"])),
            "CREATE TABLE T (\n    \"id\" UHUGEINT NOT NULL\n);"
        );
        assert_eq!(create_table(&table("Empty", &[])), "CREATE TABLE Empty (\n    \n);");
    }

    #[test]
    fn test_generate_ddl() {
        let mut tables = Tables::new();
        tables.insert("A".to_owned(), table("A", &["x u8"]));
        tables.insert("B".to_owned(), table("B", &["y bool optional"]));
        assert_eq!(
            generate_ddl(&tables),
            "CREATE TABLE A (\n    \"x\" UTINYINT NOT NULL\n);\n\nCREATE TABLE B (\n    \"y\" BOOLEAN\n);"
        );
        assert_eq!(generate_ddl(&Tables::new()), "");
    }
}

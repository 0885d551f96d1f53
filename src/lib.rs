//! # erddl
//!
//! A library for turning Mermaid ER diagrams embedded in Markdown documents into DuckDB DDL.
//!
//! # Features
//!
//! - Extract every `erDiagram` block from a document.
//! - Parse table declarations, ignoring relationship lines and malformed input.
//! - Merge tables across blocks, the last declaration of a table wins.
//! - Map diagram scalar types (`u64`, `bytes[16]`, `timestamp`, ...) to DuckDB column types.
//!
//! # Example
//!
//! ~~~rust
//! let document = r#"
//! ```mermaid
//! erDiagram
//!     Span {
//!         trace_id bytes[16]
//!         name string
//!         parent_span_id bytes[8] optional
//!     }
//! ```
//! "#;
//!
//! assert_eq!(
//!     erddl::generate_schema(document),
//!     "CREATE TABLE Span (
//!     \"trace_id\" UHUGEINT NOT NULL,
//!     \"name\" VARCHAR NOT NULL,
//!     \"parent_span_id\" UBIGINT
//! );"
//! );
//! ~~~
pub mod ddl;
pub mod extractor;
pub mod parser;
pub mod test_utils;
pub mod types;

use crate::ddl::generate_ddl;
use crate::extractor::blocks;
use crate::parser::{Tables, parse_diagram};

/// Moves `other` into `tables`. A table already present is fully replaced and keeps its position.
pub fn merge_tables(tables: &mut Tables, other: Tables) {
    for (name, table) in other {
        tables.insert(name, table);
    }
}

/// Parses and merges all the diagram blocks of a document.
pub fn parse_document(document: &str) -> Tables {
    let mut tables = Tables::new();
    let mut n_blocks = 0;
    for block in blocks(document) {
        merge_tables(&mut tables, parse_diagram(block));
        n_blocks += 1;
    }
    log::info!("Found {} tables in {} diagram blocks", tables.len(), n_blocks);
    tables
}

pub fn generate_schema(document: &str) -> String {
    generate_ddl(&parse_document(document))
}

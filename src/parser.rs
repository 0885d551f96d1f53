use indexmap::IndexMap;
use serde::Deserialize;

use crate::extractor::DIAGRAM_MARKER;

/// Cardinality notation marking a relationship line, e.g. `User ||--o{ Order : places`.
pub const RELATIONSHIP_NOTATION: &str = "||--o{";
const TABLE_OPEN: char = '{';
const TABLE_CLOSE: &str = "}";

/// A table declared in a diagram, with its column declarations kept as raw text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Table {
    pub name: String,
    pub declarations: Vec<String>,
}

impl Table {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            declarations: vec![],
        }
    }
}

/// Tables keyed by name, iterated in insertion order.
pub type Tables = IndexMap<String, Table>;

/// Whether the parser is inside a table body. There is no nesting: opening a table while one is
/// already open just switches to the new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserState {
    Idle,
    InTable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line<'a> {
    Relationship,
    Blank,
    TableOpen(&'a str),
    TableClose,
    Other(&'a str),
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Self {
        if line.contains(RELATIONSHIP_NOTATION) {
            Line::Relationship
        } else if line.is_empty() {
            Line::Blank
        } else if let Some((name, _)) = line.split_once(TABLE_OPEN) {
            Line::TableOpen(name.trim())
        } else if line == TABLE_CLOSE {
            Line::TableClose
        } else {
            Line::Other(line)
        }
    }
}

pub struct Parser {
    tables: Tables,
    state: ParserState,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Self {
            tables: Tables::new(),
            state: ParserState::Idle,
        }
    }

    pub fn state(&self) -> &ParserState {
        &self.state
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    pub fn into_tables(self) -> Tables {
        self.tables
    }

    /// Feeds a single diagram line to the parser.
    pub fn parse_line(&mut self, line: &str) {
        match Line::classify(line.trim()) {
            Line::Relationship | Line::Blank => {}
            Line::TableOpen(name) => {
                if let ParserState::InTable(open) = &self.state {
                    log::debug!("Table `{}` opened before `{}` was closed", name, open);
                }
                if self
                    .tables
                    .insert(name.to_owned(), Table::new(name))
                    .is_some()
                {
                    log::debug!("Table `{}` declared again, previous columns discarded", name);
                }
                // an unnamed table is recorded but never receives columns
                self.state = if name.is_empty() {
                    ParserState::Idle
                } else {
                    ParserState::InTable(name.to_owned())
                };
            }
            Line::TableClose => self.state = ParserState::Idle,
            Line::Other(declaration) => match &self.state {
                ParserState::InTable(name) => {
                    if let Some(table) = self.tables.get_mut(name) {
                        table.declarations.push(declaration.to_owned());
                    }
                }
                ParserState::Idle => {
                    log::debug!("Dropping line outside of any table: `{}`", declaration)
                }
            },
        }
    }

    /// Parses a whole diagram block. A leading `erDiagram` header line is skipped.
    pub fn parse(&mut self, block: &str) {
        let mut lines = block.trim().lines().peekable();
        if lines.peek().is_some_and(|line| line.trim() == DIAGRAM_MARKER) {
            lines.next();
        }
        for line in lines {
            self.parse_line(line);
        }
    }
}

pub fn parse_diagram(block: &str) -> Tables {
    let mut parser = Parser::new();
    parser.parse(block);
    parser.into_tables()
}

use serde::Deserialize;

use crate::parser::Table;

pub const PARSING_TESTS_FILE: &str = "tests/parsing_tests.toml";
pub const DDL_TESTS_FILE: &str = "tests/ddl_tests.toml";

#[derive(Deserialize, Debug, Clone)]
pub struct TestParsing {
    pub block: String,
    pub tables: Vec<Table>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct TestParsingData {
    pub tests: Vec<TestParsing>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct TestDdl {
    pub name: String,
    pub document: String,
    pub ddl: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct TestDdlData {
    pub tests: Vec<TestDdl>,
}

pub fn load_test_data<T: for<'de> Deserialize<'de>>(path: &str) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|err| anyhow::anyhow!("Cannot open test cases in {}: {}", path, err))?;
    Ok(toml::from_str(&content)?)
}

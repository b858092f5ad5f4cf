//! Tab-separated table samples pasted from spreadsheets.
//!
//! The input convention matches copy-paste from Excel: one header row and
//! zero or more data rows, cells separated by tabs. The rendered form is a
//! stable tab-separated dump; it only needs to be readable inside a prompt,
//! the exact format is not load-bearing.

use anyhow::{bail, Result};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse tab-separated text. The first non-empty line is the header;
    /// every following non-empty line is a data row. Rows shorter than the
    /// header are padded with empty cells so the dump stays rectangular.
    pub fn parse_tsv(input: &str) -> Result<Self> {
        let mut lines = input.lines().filter(|l| !l.trim().is_empty());

        let header = match lines.next() {
            Some(line) => line,
            None => bail!("Table data is empty"),
        };
        let columns: Vec<String> = header.split('\t').map(|c| c.trim().to_string()).collect();

        let mut rows = Vec::new();
        for line in lines {
            let mut cells: Vec<String> =
                line.split('\t').map(|c| c.trim().to_string()).collect();
            while cells.len() < columns.len() {
                cells.push(String::new());
            }
            rows.push(cells);
        }

        Ok(Self { columns, rows })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.columns.join("\t"))?;
        for row in &self.rows {
            write!(f, "\n{}", row.join("\t"))?;
        }
        Ok(())
    }
}

//! Serialize primitives as Jack `Screen` calls.
//!
//! Every statement takes `(x, y)` pairs where `x` is the column and `y` the
//! row, each biased by its axis [`Offset`].
use crate::cover::Primitive;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::str::FromStr;

/// Per-axis coordinate bias applied when formatting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Offset {
    /// Added to the coordinate.
    Literal(i64),
    /// Emitted as `symbol+value`, e.g. a Jack variable name.
    Symbolic(String),
}

impl Default for Offset {
    fn default() -> Self {
        Offset::Literal(0)
    }
}

impl Offset {
    /// Integer text becomes a literal offset, anything else a symbol.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidOffset(text.to_string()));
        }
        Ok(match trimmed.parse::<i64>() {
            Ok(v) => Offset::Literal(v),
            Err(_) => Offset::Symbolic(trimmed.to_string()),
        })
    }

    pub fn apply(&self, value: usize) -> String {
        match self {
            Offset::Literal(base) => (*base as i128 + value as i128).to_string(),
            Offset::Symbolic(symbol) => format!("{symbol}+{value}"),
        }
    }
}

impl FromStr for Offset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Offset::parse(s)
    }
}

/// Row and column offsets for one program.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offsets {
    pub row: Offset,
    pub col: Offset,
}

impl Offsets {
    pub fn new(row: Offset, col: Offset) -> Self {
        Self { row, col }
    }

    fn point(&self, row: usize, col: usize) -> String {
        format!("{}, {}", self.col.apply(col), self.row.apply(row))
    }
}

/// Format a single statement, without a trailing newline.
pub fn render_statement(primitive: &Primitive, offsets: &Offsets) -> String {
    match *primitive {
        Primitive::Point { row, col } => {
            format!("do Screen.drawPixel({});", offsets.point(row, col))
        }
        Primitive::Line {
            from_col,
            from_row,
            to_col,
            to_row,
        } => format!(
            "do Screen.drawLine({}, {});",
            offsets.point(from_row, from_col),
            offsets.point(to_row, to_col)
        ),
        Primitive::Rectangle {
            from_col,
            from_row,
            to_col,
            to_row,
        } => format!(
            "do Screen.drawRectangle({}, {});",
            offsets.point(from_row, from_col),
            offsets.point(to_row, to_col)
        ),
    }
}

/// Write one statement per line, in order.
pub fn write_program<'a, W, I>(out: &mut W, primitives: I, offsets: &Offsets) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Primitive>,
{
    for primitive in primitives {
        writeln!(out, "{}", render_statement(primitive, offsets))?;
    }
    Ok(())
}

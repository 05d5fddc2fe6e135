use serde::Serialize;

/// One draw instruction. Coordinates are grid indices; `col` is the screen x
/// axis and `row` the screen y axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Primitive {
    Point {
        row: usize,
        col: usize,
    },
    /// Axis-aligned: `from_row == to_row` or `from_col == to_col`.
    #[serde(rename_all = "camelCase")]
    Line {
        from_col: usize,
        from_row: usize,
        to_col: usize,
        to_row: usize,
    },
    /// Filled box with `from_row < to_row` and `from_col < to_col`.
    #[serde(rename_all = "camelCase")]
    Rectangle {
        from_col: usize,
        from_row: usize,
        to_col: usize,
        to_row: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PrimitiveKind {
    Point,
    Line,
    Rectangle,
}

impl Primitive {
    /// Classify the inclusive span `[row0, row1] × [col0, col1]`.
    pub fn from_span(row0: usize, col0: usize, row1: usize, col1: usize) -> Self {
        debug_assert!(row0 <= row1 && col0 <= col1);
        if row0 == row1 && col0 == col1 {
            Primitive::Point {
                row: row0,
                col: col0,
            }
        } else if row0 == row1 || col0 == col1 {
            Primitive::Line {
                from_col: col0,
                from_row: row0,
                to_col: col1,
                to_row: row1,
            }
        } else {
            Primitive::Rectangle {
                from_col: col0,
                from_row: row0,
                to_col: col1,
                to_row: row1,
            }
        }
    }

    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Primitive::Point { .. } => PrimitiveKind::Point,
            Primitive::Line { .. } => PrimitiveKind::Line,
            Primitive::Rectangle { .. } => PrimitiveKind::Rectangle,
        }
    }

    /// Inclusive `(row0, col0, row1, col1)` covered by the primitive.
    pub fn span(&self) -> (usize, usize, usize, usize) {
        match *self {
            Primitive::Point { row, col } => (row, col, row, col),
            Primitive::Line {
                from_col,
                from_row,
                to_col,
                to_row,
            }
            | Primitive::Rectangle {
                from_col,
                from_row,
                to_col,
                to_row,
            } => (from_row, from_col, to_row, to_col),
        }
    }

    /// Every `(row, col)` cell drawn by the primitive.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (row0, col0, row1, col1) = self.span();
        (row0..=row1).flat_map(move |row| (col0..=col1).map(move |col| (row, col)))
    }

    pub fn area(&self) -> usize {
        let (row0, col0, row1, col1) = self.span();
        (row1 - row0 + 1) * (col1 - col0 + 1)
    }
}

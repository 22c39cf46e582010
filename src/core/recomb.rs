use serde::{Deserialize, Serialize};

/// Recombination rate series stored column-wise.
///
/// Row `i` is made of the `i`-th cell of every column. The loader rejects
/// tables whose columns differ in length, and [`RecombTable::push`] keeps them
/// aligned afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecombTable {
    pub chromosome: Vec<String>,
    pub id: Vec<i64>,
    pub pos_cm: Vec<f64>,
    pub position: Vec<i64>,
    pub recomb_rate: Vec<f64>,
}

/// A borrowed view of one row of a [`RecombTable`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecombRow<'a> {
    pub chromosome: &'a str,
    pub id: i64,
    pub pos_cm: f64,
    pub position: i64,
    pub recomb_rate: f64,
}

impl RecombTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows, taken from the chromosome column.
    pub fn len(&self) -> usize {
        self.chromosome.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosome.is_empty()
    }

    /// Lengths of the five columns, in declaration order.
    pub fn column_lengths(&self) -> [usize; 5] {
        [
            self.chromosome.len(),
            self.id.len(),
            self.pos_cm.len(),
            self.position.len(),
            self.recomb_rate.len(),
        ]
    }

    pub fn is_aligned(&self) -> bool {
        let lengths = self.column_lengths();
        lengths.iter().all(|&len| len == lengths[0])
    }

    pub fn row(&self, index: usize) -> Option<RecombRow<'_>> {
        Some(RecombRow {
            chromosome: self.chromosome.get(index)?,
            id: *self.id.get(index)?,
            pos_cm: *self.pos_cm.get(index)?,
            position: *self.position.get(index)?,
            recomb_rate: *self.recomb_rate.get(index)?,
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = RecombRow<'_>> {
        (0..self.len()).filter_map(move |i| self.row(i))
    }

    /// Append a row to every column.
    pub fn push(&mut self, row: RecombRow<'_>) {
        self.chromosome.push(row.chromosome.to_string());
        self.id.push(row.id);
        self.pos_cm.push(row.pos_cm);
        self.position.push(row.position);
        self.recomb_rate.push(row.recomb_rate);
    }
}

impl<'a> FromIterator<RecombRow<'a>> for RecombTable {
    fn from_iter<I: IntoIterator<Item = RecombRow<'a>>>(iter: I) -> Self {
        let mut table = Self::new();
        for row in iter {
            table.push(row);
        }
        table
    }
}

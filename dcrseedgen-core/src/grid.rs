//! Column layout of mnemonic words and slot-by-slot verification of a
//! user's re-entry.

use crate::error::{Result, SeedgenError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_COLUMNS: usize = 5;
pub const DEFAULT_ROWS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
        }
    }
}

impl GridLayout {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }

    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 {
            return Err(SeedgenError::config("Grid must have at least one column"));
        }
        if self.rows == 0 {
            return Err(SeedgenError::config("Grid must have at least one row"));
        }
        Ok(())
    }
}

/// Splits `words` into `layout.columns` groups of `layout.rows`, the last
/// group taking whatever is left over. An empty word list gives no columns.
pub fn partition<S: AsRef<str>>(words: &[S], layout: GridLayout) -> Vec<Vec<String>> {
    if words.is_empty() || layout.columns == 0 || layout.rows == 0 {
        return Vec::new();
    }

    let mut columns = Vec::with_capacity(layout.columns);
    for col in 0..layout.columns {
        let start = col * layout.rows;
        if start >= words.len() {
            break;
        }
        let end = if col + 1 == layout.columns {
            words.len()
        } else {
            (start + layout.rows).min(words.len())
        };
        columns.push(words[start..end].iter().map(|w| w.as_ref().to_string()).collect());
    }
    columns
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordColumn {
    words: Vec<String>,
    inputs: Vec<String>,
}

impl WordColumn {
    fn new(words: Vec<String>) -> Self {
        let inputs = vec![String::new(); words.len()];
        Self { words, inputs }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    Verified,
    Mismatch,
}

impl Verification {
    pub fn is_verified(&self) -> bool {
        matches!(self, Verification::Verified)
    }

    pub fn message(&self) -> &'static str {
        match self {
            Verification::Verified => "Successfully verified words",
            Verification::Mismatch => "Incorrect verification words",
        }
    }
}

/// Mnemonic words laid out in columns, each word paired with an input slot.
#[derive(Debug, Clone, Serialize)]
pub struct WordGrid {
    layout: GridLayout,
    columns: Vec<WordColumn>,
}

impl WordGrid {
    pub fn new<S: AsRef<str>>(words: &[S], layout: GridLayout) -> Self {
        let columns = partition(words, layout)
            .into_iter()
            .map(WordColumn::new)
            .collect();
        Self { layout, columns }
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    pub fn columns(&self) -> &[WordColumn] {
        &self.columns
    }

    pub fn word_count(&self) -> usize {
        self.columns.iter().map(WordColumn::len).sum()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .flat_map(|c| c.words.iter().map(String::as_str))
    }

    /// Maps a 1-based word number onto its column and row.
    pub fn locate(&self, position: usize) -> Option<(usize, usize)> {
        if position == 0 {
            return None;
        }
        let mut remaining = position - 1;
        for (col, column) in self.columns.iter().enumerate() {
            if remaining < column.len() {
                return Some((col, remaining));
            }
            remaining -= column.len();
        }
        None
    }

    pub fn input_slot_mut(&mut self, column: usize, row: usize) -> Option<&mut String> {
        self.columns.get_mut(column)?.inputs.get_mut(row)
    }

    /// Fills the input slot of word number `position` (1-based).
    pub fn set_input(&mut self, position: usize, value: impl Into<String>) -> Result<()> {
        let (col, row) = self.locate(position).ok_or_else(|| {
            SeedgenError::internal(format!(
                "Word {} is outside the grid of {} words",
                position,
                self.word_count()
            ))
        })?;
        self.columns[col].inputs[row] = value.into();
        Ok(())
    }

    pub fn clear_inputs(&mut self) {
        for column in &mut self.columns {
            column.inputs.iter_mut().for_each(String::clear);
        }
    }

    /// 1-based numbers of the words whose slot does not match exactly.
    pub fn mismatches(&self) -> Vec<usize> {
        let mut position = 0;
        let mut wrong = Vec::new();
        for column in &self.columns {
            for (word, input) in column.words.iter().zip(&column.inputs) {
                position += 1;
                if word != input {
                    wrong.push(position);
                }
            }
        }
        wrong
    }

    pub fn verify(&self) -> Verification {
        let verified = self
            .columns
            .iter()
            .all(|c| c.words.iter().zip(&c.inputs).all(|(w, i)| w == i));

        if verified {
            Verification::Verified
        } else {
            Verification::Mismatch
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn words(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("w{}", i)).collect()
    }

    #[test]
    fn test_33_words_fill_five_columns() {
        let columns = partition(&words(33), GridLayout::default());
        let sizes: Vec<usize> = columns.iter().map(Vec::len).collect();

        assert_eq!(sizes, vec![7, 7, 7, 7, 5]);
        assert_eq!(columns[1][0], "w7");
    }

    #[test]
    fn test_24_words_use_four_columns() {
        let sizes: Vec<usize> = partition(&words(24), GridLayout::default())
            .iter()
            .map(Vec::len)
            .collect();

        assert_eq!(sizes, vec![7, 7, 7, 3]);
    }

    #[test]
    fn test_last_column_absorbs_remainder() {
        let sizes: Vec<usize> = partition(&words(40), GridLayout::default())
            .iter()
            .map(Vec::len)
            .collect();

        assert_eq!(sizes, vec![7, 7, 7, 7, 12]);
    }

    #[test]
    fn test_empty_words() {
        assert!(partition::<String>(&[], GridLayout::default()).is_empty());
        assert_eq!(WordGrid::new::<String>(&[], GridLayout::default()).word_count(), 0);
    }

    #[test]
    fn test_empty_grid_verifies() {
        let grid = WordGrid::new::<String>(&[], GridLayout::default());
        assert!(grid.verify().is_verified());
    }

    #[test]
    fn test_inputs_start_empty() {
        let grid = WordGrid::new(&words(33), GridLayout::default());

        assert!(grid.columns().iter().all(|c| !c.is_empty()));
        assert!(grid
            .columns()
            .iter()
            .all(|c| c.inputs().iter().all(String::is_empty)));
        assert_eq!(grid.verify(), Verification::Mismatch);
        assert_eq!(grid.mismatches().len(), 33);
    }

    #[test]
    fn test_locate_positions() {
        let grid = WordGrid::new(&words(33), GridLayout::default());

        assert_eq!(grid.locate(1), Some((0, 0)));
        assert_eq!(grid.locate(8), Some((1, 0)));
        assert_eq!(grid.locate(33), Some((4, 4)));
        assert_eq!(grid.locate(0), None);
        assert_eq!(grid.locate(34), None);
    }

    #[test]
    fn test_verify_is_exact() {
        let original = words(33);
        let mut grid = WordGrid::new(&original, GridLayout::default());
        for (i, w) in original.iter().enumerate() {
            grid.set_input(i + 1, w.clone()).unwrap();
        }
        assert_eq!(grid.verify(), Verification::Verified);
        assert_eq!(grid.verify().message(), "Successfully verified words");

        grid.set_input(12, "W11").unwrap();
        assert_eq!(grid.verify(), Verification::Mismatch);
        assert_eq!(grid.verify().message(), "Incorrect verification words");
        assert_eq!(grid.mismatches(), vec![12]);

        grid.set_input(12, "w11 ").unwrap();
        assert_eq!(grid.verify(), Verification::Mismatch);

        *grid.input_slot_mut(1, 4).unwrap() = "w11".to_string();
        assert!(grid.verify().is_verified());
    }

    #[test]
    fn test_set_input_out_of_range() {
        let mut grid = WordGrid::new(&words(5), GridLayout::default());
        assert!(grid.set_input(6, "x").is_err());
    }

    #[test]
    fn test_zero_layout_rejected() {
        assert!(GridLayout::new(0, 7).validate().is_err());
        assert!(GridLayout::new(5, 0).validate().is_err());
        assert!(GridLayout::default().validate().is_ok());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_partition_concatenates_to_input(n in 0usize..80) {
            let original = words(n);
            let joined: Vec<String> = partition(&original, GridLayout::default())
                .into_iter()
                .flatten()
                .collect();
            prop_assert_eq!(joined, original);
        }

        #[test]
        fn prop_single_edit_fails_verification(n in 1usize..60, pick in any::<prop::sample::Index>()) {
            let original = words(n);
            let mut grid = WordGrid::new(&original, GridLayout::default());
            for (i, w) in original.iter().enumerate() {
                grid.set_input(i + 1, w.clone()).unwrap();
            }
            prop_assert!(grid.verify().is_verified());

            let position = pick.index(n) + 1;
            let mut altered = original[position - 1].clone();
            altered.push('x');
            grid.set_input(position, altered).unwrap();
            prop_assert_eq!(grid.verify(), Verification::Mismatch);
            prop_assert_eq!(grid.mismatches(), vec![position]);
        }
    }
}

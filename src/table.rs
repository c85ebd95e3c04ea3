//! RegisterTable: an ordered set of independently laid-out [Word]s.

use crate::{
    errors::CompileError,
    field::{Access, Field},
    word::Word,
};

/// An ordered, fixed-length collection of [Word]s. Use [RegisterTable::compile]
/// to build from parallel lists of initial values and layouts, then
/// [RegisterTable::word_at] / [RegisterTable::word_at_mut] to reach each word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterTable {
    words: Vec<Word>,
}

impl RegisterTable {
    /// Compiles word `i` from `values[i]` and `layouts[i]`, all with the same
    /// [Access]. Fails if the lists differ in length or any word is invalid.
    pub fn compile(
        values: &[u32],
        layouts: &[Vec<Field>],
        access: Access,
    ) -> Result<Self, CompileError> {
        if values.len() != layouts.len() {
            tracing::debug!(
                values = values.len(),
                layouts = layouts.len(),
                "rejected register table: length mismatch"
            );
            return Err(CompileError::LengthMismatch {
                values: values.len(),
                layouts: layouts.len(),
            });
        }

        let words = values
            .iter()
            .zip(layouts)
            .map(|(&value, layout)| Word::compile(value, layout, access))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_words(words))
    }

    /// Builds a table from already compiled words, e.g. to mix access modes.
    pub fn from_words(words: Vec<Word>) -> Self {
        tracing::debug!(words = words.len(), "compiled register table");
        Self { words }
    }

    pub fn word_at(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    /// Mutable borrow of the word at `index`; writes through it update the table.
    pub fn word_at_mut(&mut self, index: usize) -> Option<&mut Word> {
        self.words.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Word> {
        self.words.iter_mut()
    }

    /// Raw values of every word, in table order.
    pub fn words(&self) -> Vec<u32> {
        self.words.iter().map(Word::word).collect()
    }
}

impl<'a> IntoIterator for &'a RegisterTable {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::AccessError;

    use super::*;

    fn layouts() -> Vec<Vec<Field>> {
        vec![
            vec![Field::new("hoge01", 1, 0), Field::new("hoge02", 4, 4)],
            vec![
                Field::new("mode", 2, 0),
                Field::new("enable", 6, 6),
                Field::new("count", 8, 7),
            ],
        ]
    }

    #[test]
    fn test_compile_table() {
        let table = RegisterTable::compile(&[0x12, 0x1C7], &layouts(), Access::ReadOnly).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.word_at(0).unwrap().get("hoge01").unwrap(), 2);
        assert_eq!(table.word_at(1).unwrap().get("mode").unwrap(), 7);
        assert_eq!(table.word_at(1).unwrap().get("enable").unwrap(), 1);
        assert_eq!(table.word_at(1).unwrap().get("count").unwrap(), 3);
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            RegisterTable::compile(&[0x12], &layouts(), Access::ReadOnly).unwrap_err(),
            CompileError::LengthMismatch {
                values: 1,
                layouts: 2
            }
        );
    }

    #[test]
    fn test_invalid_word_fails_table() {
        let mut layouts = layouts();
        layouts[1].push(Field::new("bad", 3, 5));

        assert_eq!(
            RegisterTable::compile(&[0x12, 0x1C7], &layouts, Access::ReadOnly).unwrap_err(),
            CompileError::InvalidRange("bad".to_string())
        );
    }

    #[test]
    fn test_empty_table() {
        let table = RegisterTable::compile(&[], &[], Access::ReadOnly).unwrap();
        assert!(table.is_empty());
        assert!(table.word_at(0).is_none());
    }

    #[test]
    fn test_word_at_out_of_range() {
        let mut table =
            RegisterTable::compile(&[0x12, 0x1C7], &layouts(), Access::ReadWrite).unwrap();
        assert!(table.word_at(2).is_none());
        assert!(table.word_at_mut(2).is_none());
    }

    #[test]
    fn test_mutate_through_table() {
        let mut table =
            RegisterTable::compile(&[0x12, 0x1C7], &layouts(), Access::ReadWrite).unwrap();

        table.word_at_mut(0).unwrap().set("hoge01", 3).unwrap();

        assert_eq!(table.word_at(0).unwrap().word(), 0x13);
        assert_eq!(table.word_at(1).unwrap().word(), 0x1C7);
        assert_eq!(table.words(), vec![0x13, 0x1C7]);
    }

    #[test]
    fn test_read_only_table() {
        let mut table =
            RegisterTable::compile(&[0x12, 0x1C7], &layouts(), Access::ReadOnly).unwrap();

        assert_eq!(
            table.word_at_mut(1).unwrap().set("mode", 0).unwrap_err(),
            AccessError::ReadOnlyField("mode".to_string())
        );
        assert_eq!(table.words(), vec![0x12, 0x1C7]);
    }

    #[test]
    fn test_from_words_mixed_access() {
        let status = Word::read_only(0x1, &[Field::bit("ready", 0)]).unwrap();
        let control = Word::writable(0x0, &[Field::bit("start", 0)]).unwrap();
        let mut table = RegisterTable::from_words(vec![status, control]);

        assert!(table.word_at_mut(0).unwrap().set("ready", 0).is_err());
        table.word_at_mut(1).unwrap().set("start", 1).unwrap();

        assert_eq!(table.words(), vec![0x1, 0x1]);
    }

    #[test]
    fn test_iter() {
        let mut table =
            RegisterTable::compile(&[0x12, 0x1C7], &layouts(), Access::ReadWrite).unwrap();

        for word in table.iter_mut() {
            word.load(0);
        }

        assert!((&table).into_iter().all(|w| w.word() == 0));
    }
}

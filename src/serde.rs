//! Serializable register layout description.
//!
//! These types describe register maps as data (for example a JSON file
//! shipped alongside a driver) and convert into core `bitword` types through
//! the same validation as [crate::word::Word::compile].

use serde::{Deserialize, Serialize};

use crate::{
    errors::CompileError,
    field::{Access, Field},
    table::RegisterTable,
    word::Word,
};

/// Access mode of a word; defaults to read-only.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy, PartialEq, Eq)]
pub enum AccessDef {
    #[default]
    ReadOnly,
    ReadWrite,
}

/// A single named bit range.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    /// Most significant bit, inclusive.
    pub msb: i32,
    /// Least significant bit, inclusive.
    pub lsb: i32,
}

/// One word: initial value, access mode and field layout.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct WordDef {
    /// Initial value. Only the low 32 bits are kept.
    pub value: u64,
    #[serde(default)]
    pub access: AccessDef,
    pub fields: Vec<FieldDef>,
}

/// Top-level table definition.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TableDef {
    pub words: Vec<WordDef>,
}

impl From<Access> for AccessDef {
    fn from(value: Access) -> Self {
        match value {
            Access::ReadOnly => AccessDef::ReadOnly,
            Access::ReadWrite => AccessDef::ReadWrite,
        }
    }
}

impl TryFrom<WordDef> for Word {
    type Error = CompileError;

    fn try_from(value: WordDef) -> Result<Self, Self::Error> {
        let fields: Vec<Field> = value.fields.into_iter().map(Into::into).collect();
        Word::compile(value.value as u32, &fields, value.access.into())
    }
}

impl TryFrom<TableDef> for RegisterTable {
    type Error = CompileError;

    fn try_from(value: TableDef) -> Result<Self, Self::Error> {
        let words = value
            .words
            .into_iter()
            .map(Word::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RegisterTable::from_words(words))
    }
}

impl From<&Word> for WordDef {
    fn from(value: &Word) -> Self {
        WordDef {
            value: value.word().into(),
            access: value.access().into(),
            fields: value
                .fields()
                .iter()
                .map(|f| FieldDef {
                    name: f.name.clone(),
                    msb: f.msb as i32,
                    lsb: f.lsb as i32,
                })
                .collect(),
        }
    }
}

impl From<&RegisterTable> for TableDef {
    fn from(value: &RegisterTable) -> Self {
        TableDef {
            words: value.iter().map(WordDef::from).collect(),
        }
    }
}

//! Definition of named bit ranges used to build a [crate::word::Word].

/// A single named bit range `[lsb, msb]` (both inclusive) inside a 32-bit word.
///
/// Bit indices are signed so that out-of-range input coming from a caller or a
/// layout file can be represented and rejected at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Name used to address the field in [crate::word::Word::get] and [crate::word::Word::set].
    pub name: String,
    /// Index of the most significant bit, inclusive.
    pub msb: i32,
    /// Index of the least significant bit, inclusive.
    pub lsb: i32,
}

impl Field {
    pub fn new(name: impl Into<String>, msb: i32, lsb: i32) -> Self {
        Field {
            name: name.into(),
            msb,
            lsb,
        }
    }

    /// A one-bit field at `bit`.
    pub fn bit(name: impl Into<String>, bit: i32) -> Self {
        Field::new(name, bit, bit)
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::FieldDef> for Field {
    fn from(value: crate::serde::FieldDef) -> Self {
        Field {
            name: value.name,
            msb: value.msb,
            lsb: value.lsb,
        }
    }
}

/// Whether a [crate::word::Word] accepts per-field writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Access {
    /// Fields can be read; [crate::word::Word::set] fails.
    #[default]
    ReadOnly,
    /// Fields can be read and written.
    ReadWrite,
}

#[cfg(feature = "serde")]
impl From<crate::serde::AccessDef> for Access {
    fn from(value: crate::serde::AccessDef) -> Self {
        match value {
            crate::serde::AccessDef::ReadOnly => Access::ReadOnly,
            crate::serde::AccessDef::ReadWrite => Access::ReadWrite,
        }
    }
}

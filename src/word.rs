//! Word: a 32-bit value together with named field accessors over it.

use std::collections::BTreeMap;

use crate::{
    compiled::CompiledField,
    errors::{AccessError, CompileError},
    field::{Access, Field},
};

/// A 32-bit value with a fixed layout of named fields.
///
/// The layout and the [Access] mode are fixed by [Word::compile]; only the raw
/// value changes afterwards, through [Word::set] or [Word::load].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    raw: u32,
    access: Access,
    /// Compiled fields in definition order.
    fields: Vec<CompiledField>,
}

impl Word {
    /// Compiles `fields` over the initial `value`. Fails on the first invalid
    /// or duplicate field; no partially built word is returned.
    ///
    /// Overlapping ranges are accepted. Use [Word::check_disjoint] to reject them.
    pub fn compile(value: u32, fields: &[Field], access: Access) -> Result<Self, CompileError> {
        let mut compiled_fields: Vec<CompiledField> = Vec::with_capacity(fields.len());

        for field in fields {
            let compiled_field = CompiledField::try_from(field).inspect_err(|err| {
                tracing::debug!(%err, "rejected word layout");
            })?;

            if compiled_fields.iter().any(|f| f.name == compiled_field.name) {
                tracing::debug!(field = %compiled_field.name, "rejected word layout: duplicate field");
                return Err(CompileError::DuplicateFieldName(compiled_field.name));
            }

            compiled_fields.push(compiled_field);
        }

        tracing::debug!(value, fields = compiled_fields.len(), ?access, "compiled word");

        Ok(Self {
            raw: value,
            access,
            fields: compiled_fields,
        })
    }

    pub fn read_only(value: u32, fields: &[Field]) -> Result<Self, CompileError> {
        Self::compile(value, fields, Access::ReadOnly)
    }

    pub fn writable(value: u32, fields: &[Field]) -> Result<Self, CompileError> {
        Self::compile(value, fields, Access::ReadWrite)
    }

    /// Reads field `name`, shifted down to bit 0.
    pub fn get(&self, name: &str) -> Result<u32, AccessError> {
        Ok(self.lookup(name)?.read(self.raw))
    }

    /// Writes the low bits of `value` into field `name`. Bits of `value` wider
    /// than the field are discarded; other fields are left untouched.
    pub fn set(&mut self, name: &str, value: u32) -> Result<(), AccessError> {
        let raw = self.lookup(name)?.write(self.raw, value);

        if self.access == Access::ReadOnly {
            return Err(AccessError::ReadOnlyField(name.to_string()));
        }

        tracing::trace!(field = name, old = self.raw, new = raw, "set field");
        self.raw = raw;

        Ok(())
    }

    /// Current raw value.
    pub fn word(&self) -> u32 {
        self.raw
    }

    /// Replaces the whole raw value, e.g. after re-reading a hardware register.
    /// Allowed regardless of [Access].
    pub fn load(&mut self, value: u32) {
        tracing::trace!(old = self.raw, new = value, "load word");
        self.raw = value;
    }

    pub fn access(&self) -> Access {
        self.access
    }

    pub fn is_read_only(&self) -> bool {
        self.access == Access::ReadOnly
    }

    pub fn fields(&self) -> &[CompiledField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&CompiledField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Reads every field into a map keyed by field name.
    pub fn values(&self) -> BTreeMap<String, u32> {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.read(self.raw)))
            .collect()
    }

    /// Fails with the first pair of fields (in definition order) that share a bit.
    pub fn check_disjoint(&self) -> Result<(), CompileError> {
        for (i, a) in self.fields.iter().enumerate() {
            if let Some(b) = self.fields[i + 1..].iter().find(|b| a.overlaps(b)) {
                return Err(CompileError::OverlappingFields(
                    a.name.clone(),
                    b.name.clone(),
                ));
            }
        }

        Ok(())
    }

    fn lookup(&self, name: &str) -> Result<&CompiledField, AccessError> {
        self.field(name)
            .ok_or_else(|| AccessError::UnknownField(name.to_string()))
    }
}

use crate::{
    bits::{self, WORD_BITS},
    errors::CompileError,
    field::Field,
};

/// A validated [Field] with its mask precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledField {
    pub name: String,
    pub msb: u32,
    pub lsb: u32,
    pub bit_length: u32,
    pub mask: u32,
}

impl TryFrom<&Field> for CompiledField {
    type Error = CompileError;

    fn try_from(value: &Field) -> Result<Self, Self::Error> {
        if value.name.is_empty() {
            return Err(CompileError::InvalidFieldName);
        }

        if value.lsb < 0 || value.msb < value.lsb || value.msb >= WORD_BITS as i32 {
            return Err(CompileError::InvalidRange(value.name.clone()));
        }

        let msb = value.msb as u32;
        let lsb = value.lsb as u32;
        let bit_length = msb - lsb + 1;

        Ok(CompiledField {
            name: value.name.clone(),
            msb,
            lsb,
            bit_length,
            mask: bits::field_mask(lsb, bit_length),
        })
    }
}

impl CompiledField {
    pub fn read(&self, raw: u32) -> u32 {
        bits::extract(raw, self.mask, self.lsb)
    }

    /// Returns `raw` with this field replaced by the low `bit_length` bits of `value`.
    pub fn write(&self, raw: u32, value: u32) -> u32 {
        bits::insert(raw, self.mask, self.lsb, self.bit_length, value)
    }

    pub fn overlaps(&self, other: &CompiledField) -> bool {
        self.mask & other.mask != 0
    }
}

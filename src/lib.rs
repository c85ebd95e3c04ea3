//! # bitword
//!
//! Named, bounds-checked field access over 32-bit words.
//!
//! Describe each field as an inclusive bit range `[lsb, msb]`, compile the
//! layout over an initial value, then read and write fields by name without
//! shifting or masking by hand. Writes never touch bits outside the target
//! field. Several words can be grouped into a [table::RegisterTable].
//!
//! ## Example
//!
//! ```
//! use bitword::field::Field;
//! use bitword::word::Word;
//!
//! let fields = vec![Field::new("mode", 1, 0), Field::new("enable", 4, 4)];
//! let mut word = Word::writable(0x12, &fields).unwrap();
//! assert_eq!(word.get("mode"), Ok(2));
//!
//! word.set("mode", 3).unwrap();
//! assert_eq!(word.word(), 0x13);
//! assert_eq!(word.get("enable"), Ok(1));
//! ```

pub mod bits;
pub mod compiled;
pub mod errors;
pub mod field;
#[cfg(feature = "serde")]
pub mod serde;
pub mod table;
pub mod word;

//! Bit-field codecs for fixed-width instruction words.
//!
//! A [`BitField`] names an inclusive range of bits inside a [`Word`]. Bit 0 is
//! the low-order bit, bit 31 the high-order one. Fields are usually built once
//! as constants and then used to pack values into a word while assembling it,
//! or to read them back while decoding.
//!
//! ```
//! use wordfield::BitField;
//!
//! const NIBBLE: BitField = BitField::fixed(4, 7);
//!
//! assert_eq!(NIBBLE.insert(0x0f, 0xaa00_aa00), 0xaa00_aaf0);
//! assert_eq!(NIBBLE.extract(0xaa00_aaf0), 0x0f);
//! assert_eq!(NIBBLE.extract_signed(0xaa00_aaf0), Ok(-1));
//! ```

mod error;
mod field;
mod sign;

pub use error::FieldError;
pub use field::BitField;
pub use sign::{sign_extend, try_sign_extend};

/// The host integer every field is carved from.
pub type Word = u32;

/// Number of bits in a [`Word`].
pub const WORD_SIZE: u32 = Word::BITS;

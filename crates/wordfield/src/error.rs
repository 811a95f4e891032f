use std::fmt;

/// Errors raised while building or using a [`BitField`](crate::BitField).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
	/// A field bound lies outside the word.
	BitOutOfRange { bit: u32, word_size: u32 },
	/// `from_bit` is above `to_bit`.
	ReversedBounds { from_bit: u32, to_bit: u32 },
	/// Signed interpretation of a field too narrow to carry a sign bit.
	NoSignBit { width: u32 },
	/// Sign extension asked for more bits than a word holds.
	WidthOutOfRange { width: u32 },
	/// A value does not fit in the field.
	ValueTooWide { value: u32, width: u32 },
}

impl fmt::Display for FieldError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FieldError::BitOutOfRange { bit, word_size } => {
				write!(f, "bit {bit} is outside a {word_size}-bit word")
			}
			FieldError::ReversedBounds { from_bit, to_bit } => {
				write!(f, "field bounds are reversed: from_bit {from_bit} > to_bit {to_bit}")
			}
			FieldError::NoSignBit { width } => {
				write!(f, "a {width}-bit field has no sign bit; signed fields need at least 2 bits")
			}
			FieldError::WidthOutOfRange { width } => write!(f, "width {width} is wider than a word"),
			FieldError::ValueTooWide { value, width } => {
				write!(f, "value {value:#x} does not fit in {width} bits")
			}
		}
	}
}

impl std::error::Error for FieldError {}

use std::fmt;

use tracing::trace;

use crate::{try_sign_extend, FieldError, Word, WORD_SIZE};

/// One inclusive range of bits `from_bit..=to_bit` within a [`Word`].
///
/// The descriptor never holds a word; it only knows where its bits live.
/// Masks are computed once at construction since insertion and extraction
/// sit on the encode/decode hot path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitField {
	from_bit: u32,
	to_bit: u32,
	width: u32,
	value_mask: Word,
	field_mask: Word,
	hole_mask: Word,
}

impl BitField {
	/// Describes bits `from_bit..=to_bit`, with bit 0 the least significant.
	pub const fn new(from_bit: u32, to_bit: u32) -> Result<Self, FieldError> {
		if from_bit >= WORD_SIZE {
			return Err(FieldError::BitOutOfRange { bit: from_bit, word_size: WORD_SIZE });
		}
		if to_bit >= WORD_SIZE {
			return Err(FieldError::BitOutOfRange { bit: to_bit, word_size: WORD_SIZE });
		}
		if from_bit > to_bit {
			return Err(FieldError::ReversedBounds { from_bit, to_bit });
		}

		let width = to_bit - from_bit + 1;
		// low `width` bits set, 1..=32 so the shift stays below 32
		let value_mask = Word::MAX >> (WORD_SIZE - width);
		let field_mask = value_mask << from_bit;
		Ok(Self {
			from_bit,
			to_bit,
			width,
			value_mask,
			field_mask,
			hole_mask: !field_mask,
		})
	}

	/// Like [`BitField::new`], for `const` items. Invalid bounds panic, which
	/// in a const initializer means a compile error.
	pub const fn fixed(from_bit: u32, to_bit: u32) -> Self {
		match Self::new(from_bit, to_bit) {
			Ok(field) => field,
			Err(_) => panic!("invalid bit field bounds"),
		}
	}

	#[inline]
	pub const fn from_bit(&self) -> u32 {
		self.from_bit
	}

	#[inline]
	pub const fn to_bit(&self) -> u32 {
		self.to_bit
	}

	#[inline]
	pub const fn width(&self) -> u32 {
		self.width
	}

	/// The low `width` bits set.
	#[inline]
	pub const fn value_mask(&self) -> Word {
		self.value_mask
	}

	/// The field's bit positions within a word.
	#[inline]
	pub const fn field_mask(&self) -> Word {
		self.field_mask
	}

	/// Every bit of the word except the field's.
	#[inline]
	pub const fn hole_mask(&self) -> Word {
		self.hole_mask
	}

	/// Returns `word` with this field replaced by `value`.
	///
	/// Only the low `width` bits of `value` are used; anything above them is
	/// dropped, the same way a hardware field write only touches the
	/// addressed bits. Use [`BitField::insert_checked`] to reject such values
	/// instead.
	#[inline]
	pub const fn insert(&self, value: Word, word: Word) -> Word {
		(word & self.hole_mask) | ((value & self.value_mask) << self.from_bit)
	}

	/// Inserts the two's-complement bits of `value`, truncated to the field.
	#[inline]
	pub const fn insert_signed(&self, value: i32, word: Word) -> Word {
		self.insert(value as Word, word)
	}

	/// [`BitField::insert`] that fails rather than truncating.
	pub const fn insert_checked(&self, value: Word, word: Word) -> Result<Word, FieldError> {
		if !self.fits(value) {
			return Err(FieldError::ValueTooWide { value, width: self.width });
		}
		Ok(self.insert(value, word))
	}

	/// Whether `value` is representable without truncation.
	#[inline]
	pub const fn fits(&self, value: Word) -> bool {
		value & !self.value_mask == 0
	}

	/// Whether `value` is representable as a signed field of this width.
	pub const fn fits_signed(&self, value: i32) -> bool {
		let half = 1i64 << (self.width - 1);
		let value = value as i64;
		-half <= value && value < half
	}

	/// Reads the field back, right-aligned.
	#[inline]
	pub const fn extract(&self, word: Word) -> Word {
		(word >> self.from_bit) & self.value_mask
	}

	/// Reads the field back as a two's-complement value.
	///
	/// Fails with [`FieldError::NoSignBit`] on 1-bit fields.
	pub fn extract_signed(&self, word: Word) -> Result<i32, FieldError> {
		let raw = self.extract(word);
		trace!("extracting {self} from {word:#010x} as signed, raw {raw:#x}");
		try_sign_extend(raw, self.width)
	}

	/// Whether the two fields share any bit.
	pub const fn overlaps(&self, other: &BitField) -> bool {
		self.field_mask & other.field_mask != 0
	}
}

impl fmt::Display for BitField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "bits[{}..={}]", self.from_bit, self.to_bit)
	}
}

use tracing::debug;

use crate::{FieldError, Word, WORD_SIZE};

/// Interprets the low `width` bits of `field` as a two's-complement integer.
///
/// `field` must fit in `width` bits and `width` must be in `2..=WORD_SIZE`.
/// The same pattern reads differently at different widths: `0b111` is `-1`
/// as a 3-bit field but `7` as a 4-bit one.
///
/// # Panics
///
/// Panics when either precondition is broken. Use [`try_sign_extend`] for
/// input that has not been validated yet.
pub fn sign_extend(field: Word, width: u32) -> i32 {
	match try_sign_extend(field, width) {
		Ok(value) => value,
		Err(err) => panic!("sign_extend({field:#x}, {width}): {err}"),
	}
}

/// Checked form of [`sign_extend`].
pub fn try_sign_extend(field: Word, width: u32) -> Result<i32, FieldError> {
	if width <= 1 {
		return Err(FieldError::NoSignBit { width });
	}
	if width > WORD_SIZE {
		return Err(FieldError::WidthOutOfRange { width });
	}
	if width < WORD_SIZE && field >> width != 0 {
		return Err(FieldError::ValueTooWide { value: field, width });
	}

	debug!("sign extending {field} ({field:#b}) in a {width}-bit field");
	// 1000... and 0111... for the width of the field
	let sign_bit: Word = 1 << (width - 1);
	let mask = sign_bit - 1;
	if field & sign_bit == 0 {
		return Ok(field as i32);
	}

	// at most 2^31 in magnitude, so the narrowing below is exact
	let extended = (i64::from(field & mask) - i64::from(sign_bit)) as i32;
	debug!("sign bit set, subtracted 2^{} to get {extended} ({extended:#b})", width - 1);
	Ok(extended)
}

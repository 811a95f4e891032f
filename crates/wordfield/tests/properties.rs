use proptest::prelude::*;
use wordfield::{sign_extend, BitField, Word, WORD_SIZE};

fn any_field() -> impl Strategy<Value = BitField> {
	(0..WORD_SIZE)
		.prop_flat_map(|from| (Just(from), from..WORD_SIZE))
		.prop_map(|(from, to)| BitField::new(from, to).unwrap())
}

proptest! {
	#[test]
	fn insert_then_extract(field in any_field(), value in any::<Word>(), word in any::<Word>()) {
		let packed = field.insert(value, word);
		prop_assert_eq!(field.extract(packed), value & field.value_mask());
	}

	#[test]
	fn insert_only_touches_the_field(field in any_field(), value in any::<Word>(), word in any::<Word>()) {
		let packed = field.insert(value, word);
		for bit in 0..WORD_SIZE {
			if (field.from_bit()..=field.to_bit()).contains(&bit) {
				continue;
			}
			prop_assert_eq!((packed >> bit) & 1, (word >> bit) & 1, "bit {} changed", bit);
		}
	}

	#[test]
	fn insert_is_idempotent(field in any_field(), value in any::<Word>(), word in any::<Word>()) {
		let once = field.insert(value, word);
		prop_assert_eq!(field.insert(value, once), once);
	}

	#[test]
	fn full_width_is_identity(value in any::<Word>(), word in any::<Word>()) {
		let all = BitField::new(0, WORD_SIZE - 1).unwrap();
		prop_assert_eq!(all.extract(word), word);
		prop_assert_eq!(all.insert(value, word), value);
	}

	#[test]
	fn signed_values_survive_when_they_fit(
		field in any_field().prop_filter("needs a sign bit", |f| f.width() > 1),
		raw in any::<Word>(),
		word in any::<Word>()
	) {
		// spread `raw` over the field's signed range
		let half = 1i64 << (field.width() - 1);
		let value = (i64::from(raw) % (2 * half) - half) as i32;
		prop_assert!(field.fits_signed(value));
		let packed = field.insert_signed(value, word);
		prop_assert_eq!(field.extract_signed(packed), Ok(value));
	}

	#[test]
	fn sign_extend_matches_shift_trick(width in 2..=WORD_SIZE, raw in any::<Word>()) {
		let field = if width == WORD_SIZE { raw } else { raw & ((1 << width) - 1) };
		// move the sign bit to bit 31 and let an arithmetic shift spread it
		let expected = ((field << (WORD_SIZE - width)) as i32) >> (WORD_SIZE - width);
		prop_assert_eq!(sign_extend(field, width), expected);
	}

	#[test]
	fn checked_insert_agrees_with_fits(field in any_field(), value in any::<Word>(), word in any::<Word>()) {
		match field.insert_checked(value, word) {
			Ok(packed) => {
				prop_assert!(field.fits(value));
				prop_assert_eq!(packed, field.insert(value, word));
			}
			Err(_) => prop_assert!(!field.fits(value)),
		}
	}
}

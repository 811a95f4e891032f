use std::num::ParseIntError;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use wordfield::{try_sign_extend, BitField, FieldError, Word};

#[derive(Debug, Parser)]
#[command(version, about = "Pack and unpack bit fields of a 32-bit word")]
struct CliArgs {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Debug, Args)]
struct Bounds {
	/// Lowest bit of the field, 0 is the least significant
	#[arg(long = "from", value_parser = parse_dec_or_hex)]
	from_bit: u32,
	/// Highest bit of the field, inclusive
	#[arg(long = "to", value_parser = parse_dec_or_hex)]
	to_bit: u32,
}

impl Bounds {
	fn field(&self) -> Result<BitField, FieldError> {
		let field = BitField::new(self.from_bit, self.to_bit)?;
		debug!("using {field}, width {}", field.width());
		Ok(field)
	}
}

#[derive(Debug, Subcommand)]
enum Commands {
	/// Print the width and masks of a field
	Describe {
		#[command(flatten)]
		bounds: Bounds,
	},
	/// Replace a field of a word with a value
	Insert {
		#[command(flatten)]
		bounds: Bounds,
		#[arg(long, allow_negative_numbers = true, value_parser = parse_signed_dec_or_hex)]
		value: i64,
		#[arg(long, value_parser = parse_dec_or_hex)]
		word: Word,
		/// Reject values that do not fit instead of truncating them
		#[arg(long)]
		strict: bool,
	},
	/// Read a field out of a word
	Extract {
		#[command(flatten)]
		bounds: Bounds,
		#[arg(long, value_parser = parse_dec_or_hex)]
		word: Word,
		/// Interpret the field as two's complement
		#[arg(long)]
		signed: bool,
	},
	/// Interpret the low bits of a value as two's complement
	SignExtend {
		#[arg(long, value_parser = parse_dec_or_hex)]
		width: u32,
		#[arg(long, value_parser = parse_dec_or_hex)]
		field: Word,
	},
}

fn parse_dec_or_hex(s: &str) -> Result<u32, ParseIntError> {
	if let Some(hex) = s.strip_prefix("0x") {
		u32::from_str_radix(hex, 16)
	} else {
		s.parse()
	}
}

fn parse_signed_dec_or_hex(s: &str) -> Result<i64, ParseIntError> {
	match s.strip_prefix('-') {
		Some(rest) => parse_dec_or_hex(rest).map(|v| -i64::from(v)),
		None => parse_dec_or_hex(s).map(i64::from),
	}
}

fn main() -> ExitCode {
	tracing_subscriber::registry()
		.with(tracing_subscriber::fmt::layer().without_time())
		.with(tracing_subscriber::EnvFilter::from_default_env())
		.init();

	let cli = CliArgs::parse();

	match run(cli.command) {
		Ok(out) => {
			println!("{out}");
			ExitCode::SUCCESS
		}
		Err(err) => {
			error!("{err}");
			ExitCode::FAILURE
		}
	}
}

fn run(command: Commands) -> Result<String, FieldError> {
	match command {
		Commands::Describe { bounds } => {
			let field = bounds.field()?;
			Ok(format!(
				"{field}\nwidth:      {}\nvalue mask: {:#010x}\nfield mask: {:#010x}\nhole mask:  {:#010x}",
				field.width(),
				field.value_mask(),
				field.field_mask(),
				field.hole_mask(),
			))
		}
		Commands::Insert {
			bounds,
			value,
			word,
			strict,
		} => {
			let field = bounds.field()?;
			let out = insert(&field, value, word, strict)?;
			Ok(format!("{out:#010x}"))
		}
		Commands::Extract { bounds, word, signed } => {
			let field = bounds.field()?;
			if signed {
				Ok(field.extract_signed(word)?.to_string())
			} else {
				Ok(format!("{:#x}", field.extract(word)))
			}
		}
		Commands::SignExtend { width, field } => Ok(try_sign_extend(field, width)?.to_string()),
	}
}

/// Negative values go in as two's complement, everything else as unsigned.
fn insert(field: &BitField, value: i64, word: Word, strict: bool) -> Result<Word, FieldError> {
	// the parsers only produce values within u32 magnitude
	if value < 0 {
		let signed = value as i32;
		if strict && (i64::from(signed) != value || !field.fits_signed(signed)) {
			return Err(FieldError::ValueTooWide {
				value: signed as Word,
				width: field.width(),
			});
		}
		Ok(field.insert_signed(signed, word))
	} else if strict {
		field.insert_checked(value as Word, word)
	} else {
		Ok(field.insert(value as Word, word))
	}
}

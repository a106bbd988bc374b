use serde_json::Value;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::json::convert::mismatch;
use crate::json::{FromJson, JsonError, Result};

const ISO8601_MILLISECONDS: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");
const ISO8601_SECONDS: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z");

const EXPECTED_DATE: &str = "ISO-8601 date string";

/// Ordered list of accepted date layouts, all read as UTC. First match wins.
#[derive(Debug, Clone, Copy)]
pub struct DateFormats {
	formats: &'static [&'static [BorrowedFormatItem<'static>]],
}

impl DateFormats {
	/// `yyyy-MM-ddTHH:mm:ss.SSSZ`, then `yyyy-MM-ddTHH:mm:ssZ`.
	pub const ISO8601: Self = Self::new(&[ISO8601_MILLISECONDS, ISO8601_SECONDS]);

	/// Build a list from compile-time format descriptions.
	pub const fn new(formats: &'static [&'static [BorrowedFormatItem<'static>]]) -> Self {
		Self { formats }
	}

	/// Parse `text` with the first matching layout.
	pub fn parse(&self, text: &str) -> Option<OffsetDateTime> {
		self.formats
			.iter()
			.find_map(|format| PrimitiveDateTime::parse(text, *format).ok())
			.map(PrimitiveDateTime::assume_utc)
	}
}

impl Default for DateFormats {
	fn default() -> Self {
		Self::ISO8601
	}
}

/// Convert a date string using an explicit format list.
pub fn date_from_json(value: &Value, formats: &DateFormats) -> Result<OffsetDateTime> {
	let text = value.as_str().ok_or_else(|| mismatch(EXPECTED_DATE, value))?;
	formats.parse(text).ok_or_else(|| JsonError::type_mismatch(EXPECTED_DATE, format!("{text:?}")))
}

impl FromJson for OffsetDateTime {
	fn from_json(value: &Value) -> Result<Self> {
		date_from_json(value, &DateFormats::ISO8601)
	}
}

use std::fmt;

use serde::{de, Deserialize, Deserializer};

use smartstring::alias::{String as SmartString};

use chrono::NaiveDate;

use super::error::Result;


/// Only the first country of the area tree is ever navigated, so only that
/// one has to have the full shape. Later entries may be anything.
fn first_country<'de, D>(deserializer: D) -> std::result::Result<Option<Country>, D::Error>
	where D: Deserializer<'de>
{
	let entries = Vec::<serde_json::Value>::deserialize(deserializer)?;
	match entries.into_iter().next() {
		Some(v) => Country::deserialize(v).map(Some).map_err(de::Error::custom),
		None => Ok(None),
	}
}


/// The feed has shipped counts both as plain numbers and as numeric
/// strings ("41").
fn count_compat<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
	where D: Deserializer<'de>
{
	struct CountVisitor;

	impl<'de> de::Visitor<'de> for CountVisitor {
		type Value = u64;

		fn expecting<'f>(&self, f: &'f mut fmt::Formatter) -> fmt::Result {
			f.write_str("a non-negative count as number or string")
		}

		fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<u64, E> {
			Ok(v)
		}

		fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<u64, E> {
			if v < 0 {
				return Err(E::custom("count must not be negative"))
			}
			Ok(v as u64)
		}

		fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<u64, E> {
			v.trim().parse::<u64>().map_err(E::custom)
		}
	}

	deserializer.deserialize_any(CountVisitor)
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Counts {
	#[serde(deserialize_with = "count_compat")]
	pub confirm: u64,
	#[serde(deserialize_with = "count_compat")]
	pub heal: u64,
	#[serde(deserialize_with = "count_compat")]
	pub dead: u64,
}


#[derive(Debug, Clone, Deserialize)]
pub struct City {
	pub name: SmartString,
	pub today: Counts,
	pub total: Counts,
}


#[derive(Debug, Clone, Deserialize)]
pub struct Province {
	pub name: SmartString,
	pub children: Vec<City>,
}


#[derive(Debug, Clone, Deserialize)]
pub struct Country {
	pub name: SmartString,
	pub children: Vec<Province>,
}


#[derive(Debug, Clone, Deserialize)]
pub struct DailyTotals {
	/// As published, e.g. "01.13".
	pub date: SmartString,
	#[serde(deserialize_with = "count_compat")]
	pub confirm: u64,
	#[serde(deserialize_with = "count_compat")]
	pub suspect: u64,
	#[serde(default, deserialize_with = "count_compat")]
	pub dead: u64,
	#[serde(default, deserialize_with = "count_compat")]
	pub heal: u64,
}


#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
	/// Verbatim, e.g. "2020-02-05 10:23:14".
	#[serde(rename = "lastUpdateTime")]
	pub last_update: String,
	#[serde(rename = "chinaDayList")]
	pub daily: Vec<DailyTotals>,
	/// First entry of `areaTree`; `None` when the tree is empty.
	#[serde(rename = "areaTree", deserialize_with = "first_country")]
	pub country: Option<Country>,
}

impl Snapshot {
	/// Calendar date of `lastUpdateTime`, if it starts with one.
	pub fn last_update_date(&self) -> Option<NaiveDate> {
		let prefix = self.last_update.get(..10)?;
		NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
	}
}


#[derive(Debug, Clone, Deserialize)]
struct Envelope {
	data: String,
}


/// Decodes the response body. The envelope's `data` field is itself a
/// JSON document in a string, hence two parses.
pub fn decode_feed(body: &[u8]) -> Result<Snapshot> {
	let envelope: Envelope = serde_json::from_slice(body)?;
	Ok(serde_json::from_str(&envelope.data)?)
}

use std::path::Path;

use log::debug;

use serde_json::{json, Value};

use smartstring::alias::{String as SmartString};

use chrono::NaiveDate;

use enum_map::{Enum, EnumMap};

use crate::error::Result;
use crate::flatten::CityRecord;

use super::{page, write_page, CHINA_MAP_JS};


/// Pieces of the choropleth color scale. The top piece is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum Bucket {
	UnderTen,
	Tens,
	Hundreds,
	HighHundreds,
	Thousands,
}

impl Bucket {
	pub const ALL: [Bucket; 5] = [
		Self::UnderTen,
		Self::Tens,
		Self::Hundreds,
		Self::HighHundreds,
		Self::Thousands,
	];

	/// Inclusive bounds; `None` as upper bound means unbounded.
	pub fn range(&self) -> (u64, Option<u64>) {
		match self {
			Self::UnderTen => (1, Some(9)),
			Self::Tens => (10, Some(99)),
			Self::Hundreds => (100, Some(499)),
			Self::HighHundreds => (500, Some(999)),
			Self::Thousands => (1000, None),
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::UnderTen => "10人以下",
			Self::Tens => "10-99人",
			Self::Hundreds => "100-499人",
			Self::HighHundreds => "500-999人",
			Self::Thousands => "1000人以上",
		}
	}

	pub fn color(&self) -> &'static str {
		match self {
			Self::UnderTen => "#FFE6BE",
			Self::Tens => "#FFB769",
			Self::Hundreds => "#FF8F66",
			Self::HighHundreds => "#ED514E",
			Self::Thousands => "#CA0D11",
		}
	}

	/// Values below the first piece (i.e. zero) are not colored.
	pub fn classify(value: u64) -> Option<Bucket> {
		Self::ALL.iter().copied().find(|b| {
			let (low, high) = b.range();
			value >= low && high.map_or(true, |high| value <= high)
		})
	}

	fn piece(&self) -> Value {
		let (low, high) = self.range();
		let mut piece = json!({
			"min": low,
			"label": self.label(),
			"color": self.color(),
		});
		if let Some(high) = high {
			piece["max"] = json!(high);
		}
		piece
	}
}


pub struct MapChart {
	date: NaiveDate,
	data: Vec<(SmartString, u64)>,
}

impl MapChart {
	/// Pairs each record's province with its cumulative confirmed count.
	/// A province with several cities shows up several times; nothing is
	/// summed.
	pub fn from_records(records: &[CityRecord], date: NaiveDate) -> Self {
		Self{
			date,
			data: records.iter()
				.map(|r| (r.province.clone(), r.total_confirm))
				.collect(),
		}
	}

	pub fn file_name(date: NaiveDate) -> String {
		format!("ncov_map_chart_{}.html", date)
	}

	pub fn title(&self) -> String {
		format!("nCoV疫情地图({})", self.date)
	}

	pub fn data(&self) -> &[(SmartString, u64)] {
		&self.data[..]
	}

	pub fn histogram(&self) -> EnumMap<Bucket, usize> {
		let mut result = EnumMap::default();
		for (_, v) in self.data.iter() {
			if let Some(bucket) = Bucket::classify(*v) {
				result[bucket] += 1;
			}
		}
		result
	}

	pub fn option(&self) -> Value {
		let data: Vec<Value> = self.data.iter()
			.map(|(name, value)| json!({"name": name.to_string(), "value": value}))
			.collect();
		let pieces: Vec<Value> = Bucket::ALL.iter().map(|b| b.piece()).collect();
		json!({
			"title": {"text": self.title()},
			"tooltip": {"show": true, "trigger": "item"},
			"legend": {"data": ["中国"], "show": true},
			"series": [{
				"type": "map",
				"name": "中国",
				"map": "china",
				"showLegendSymbol": false,
				"label": {"show": true},
				"data": data,
			}],
			"visualMap": {
				"type": "piecewise",
				"show": true,
				"min": 0,
				"max": 10000,
				"pieces": pieces,
			},
		})
	}

	pub fn render<P: AsRef<Path>>(&self, path: P) -> Result<()> {
		for (bucket, n) in &self.histogram() {
			debug!("{:>12}: {} regions", bucket.label(), n);
		}
		let html = page(&self.title(), &self.option(), &[CHINA_MAP_JS])?;
		write_page(path, &html)
	}
}

use std::path::PathBuf;

use chrono::NaiveDate;

use super::chart::{LineChart, MapChart};
use super::fetch::FEED_URL;
use super::naive_today;


pub static TABLE_FILE: &'static str = "output.csv";


#[derive(Debug, Clone)]
pub struct Settings {
	pub feed_url: String,
	pub output_dir: PathBuf,
	/// Date embedded into the chart titles and file names.
	pub date: NaiveDate,
}

impl Settings {
	pub fn table_path(&self) -> PathBuf {
		self.output_dir.join(TABLE_FILE)
	}

	pub fn map_path(&self) -> PathBuf {
		self.output_dir.join(MapChart::file_name(self.date))
	}

	pub fn line_path(&self) -> PathBuf {
		self.output_dir.join(LineChart::file_name(self.date))
	}
}

impl Default for Settings {
	/// The fixed run: feed URL, current directory, today's date.
	fn default() -> Self {
		Self{
			feed_url: FEED_URL.into(),
			output_dir: PathBuf::from("."),
			date: naive_today(),
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn paths_live_in_output_dir() {
		let settings = Settings{
			feed_url: FEED_URL.into(),
			output_dir: PathBuf::from("/tmp/out"),
			date: NaiveDate::from_ymd_opt(2020, 2, 5).unwrap(),
		};
		assert_eq!(settings.table_path(), PathBuf::from("/tmp/out/output.csv"));
		assert_eq!(settings.map_path(), PathBuf::from("/tmp/out/ncov_map_chart_2020-02-05.html"));
		assert_eq!(settings.line_path(), PathBuf::from("/tmp/out/ncov_line_chart-2020-02-05.html"));
	}

	#[test]
	fn defaults_are_fixed() {
		let settings = Settings::default();
		assert_eq!(settings.feed_url, "https://view.inews.qq.com/g2/getOnsInfo?name=disease_h5");
		assert_eq!(settings.table_path(), PathBuf::from("./output.csv"));
	}

	#[test]
	fn same_day_same_names_other_day_other_names() {
		let mut a = Settings::default();
		a.date = NaiveDate::from_ymd_opt(2020, 2, 5).unwrap();
		let mut b = a.clone();
		assert_eq!(a.map_path(), b.map_path());
		b.date = b.date.succ_opt().unwrap();
		assert_ne!(a.map_path(), b.map_path());
		assert_ne!(a.line_path(), b.line_path());
		assert_eq!(a.table_path(), b.table_path());
	}
}

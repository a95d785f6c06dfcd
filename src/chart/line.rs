use std::path::Path;

use serde_json::{json, Value};

use smartstring::alias::{String as SmartString};

use chrono::NaiveDate;

use crate::error::Result;
use crate::feed::DailyTotals;

use super::{page, write_page};


static TITLE: &'static str = "nCoV确认病例与疑似病例曲线";


/// National confirmed and suspected totals over the feed's dates, in feed
/// order.
pub struct LineChart {
	x: Vec<SmartString>,
	confirmed: Vec<u64>,
	suspected: Vec<u64>,
}

impl LineChart {
	pub fn from_daily(daily: &[DailyTotals]) -> Self {
		let mut x = Vec::with_capacity(daily.len());
		let mut confirmed = Vec::with_capacity(daily.len());
		let mut suspected = Vec::with_capacity(daily.len());
		for day in daily.iter() {
			x.push(day.date.clone());
			confirmed.push(day.confirm);
			suspected.push(day.suspect);
		}
		Self{x, confirmed, suspected}
	}

	pub fn file_name(date: NaiveDate) -> String {
		format!("ncov_line_chart-{}.html", date)
	}

	pub fn x_axis(&self) -> &[SmartString] {
		&self.x[..]
	}

	pub fn option(&self) -> Value {
		let x: Vec<String> = self.x.iter().map(|d| d.to_string()).collect();
		json!({
			"title": {"text": TITLE},
			"tooltip": {"show": true, "trigger": "item"},
			"legend": {"data": ["确认", "疑似"], "show": true},
			"xAxis": {"type": "category", "data": x},
			"yAxis": {"type": "value"},
			"series": [
				{"type": "line", "name": "确认", "data": self.confirmed},
				{"type": "line", "name": "疑似", "data": self.suspected},
			],
		})
	}

	pub fn render<P: AsRef<Path>>(&self, path: P) -> Result<()> {
		let html = page(TITLE, &self.option(), &[])?;
		write_page(path, &html)
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	fn day(date: &str, confirm: u64, suspect: u64) -> DailyTotals {
		DailyTotals{date: date.into(), confirm, suspect, dead: 0, heal: 0}
	}

	#[test]
	fn axis_follows_feed_order() {
		// deliberately not sorted
		let daily = vec![day("01.14", 41, 0), day("01.13", 41, 0), day("01.20", 291, 54)];
		let chart = LineChart::from_daily(&daily);
		let x: Vec<&str> = chart.x_axis().iter().map(|d| &**d).collect();
		assert_eq!(x, vec!["01.14", "01.13", "01.20"]);

		let option = chart.option();
		assert_eq!(option["xAxis"]["data"].as_array().unwrap().len(), 3);
		assert_eq!(option["series"][0]["data"], json!([41, 41, 291]));
		assert_eq!(option["series"][1]["data"], json!([0, 0, 54]));
		assert_eq!(option["series"][1]["name"], "疑似");
	}

	#[test]
	fn empty_series() {
		let chart = LineChart::from_daily(&[]);
		assert!(chart.x_axis().is_empty());
		assert_eq!(chart.option()["xAxis"]["data"], json!([]));
	}

	#[test]
	fn file_name_embeds_date() {
		let date = NaiveDate::from_ymd_opt(2020, 2, 5).unwrap();
		assert_eq!(LineChart::file_name(date), "ncov_line_chart-2020-02-05.html");
	}
}

use serde::Serialize;

use smartstring::alias::{String as SmartString};

use super::error::{PayloadError, Result};
use super::feed::Snapshot;


/// One city's statistics for one snapshot. Field order is the column order
/// of the exported table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityRecord {
	/// `lastUpdateTime` of the snapshot, as the feed sent it.
	#[serde(rename = "日期")]
	pub date: String,
	#[serde(rename = "省份")]
	pub province: SmartString,
	#[serde(rename = "市")]
	pub city: SmartString,
	#[serde(rename = "新增确认")]
	pub today_confirm: u64,
	#[serde(rename = "新增治愈")]
	pub today_heal: u64,
	#[serde(rename = "新增死亡")]
	pub today_dead: u64,
	#[serde(rename = "累计确认")]
	pub total_confirm: u64,
	#[serde(rename = "累计治愈")]
	pub total_heal: u64,
	#[serde(rename = "累计死亡")]
	pub total_dead: u64,
}

impl CityRecord {
	pub const COLUMNS: [&'static str; 9] = [
		"日期", "省份", "市",
		"新增确认", "新增治愈", "新增死亡",
		"累计确认", "累计治愈", "累计死亡",
	];
}


/// Walks country -> province -> city and returns a fresh list of records
/// in feed order. Only the first country of the area tree is used.
pub fn flatten(snapshot: &Snapshot) -> Result<Vec<CityRecord>> {
	let country = match snapshot.country.as_ref() {
		Some(c) => c,
		None => return Err(PayloadError::NoCountry.into()),
	};

	let mut result = Vec::new();
	for province in country.children.iter() {
		for city in province.children.iter() {
			result.push(CityRecord{
				date: snapshot.last_update.clone(),
				province: province.name.clone(),
				city: city.name.clone(),
				today_confirm: city.today.confirm,
				today_heal: city.today.heal,
				today_dead: city.today.dead,
				total_confirm: city.total.confirm,
				total_heal: city.total.heal,
				total_dead: city.total.dead,
			});
		}
	}
	Ok(result)
}


#[cfg(test)]
mod tests {
	use super::*;

	use crate::error::Error;
	use crate::feed::{City, Country, Counts, Province};

	fn counts(confirm: u64) -> Counts {
		Counts{confirm, heal: 0, dead: 0}
	}

	fn province(name: &str, cities: &[(&str, u64)]) -> Province {
		Province{
			name: name.into(),
			children: cities.iter().map(|(name, total)| City{
				name: (*name).into(),
				today: counts(1),
				total: counts(*total),
			}).collect(),
		}
	}

	fn snapshot(provinces: Vec<Province>) -> Snapshot {
		Snapshot{
			last_update: "2020-02-05 10:23:14".into(),
			daily: Vec::new(),
			country: Some(Country{name: "中国".into(), children: provinces}),
		}
	}

	#[test]
	fn one_record_per_city_in_feed_order() {
		let s = snapshot(vec![
			province("湖北", &[("武汉", 10117), ("黄冈", 1645)]),
			province("西藏", &[]),
			province("广东", &[("深圳", 368)]),
		]);
		let records = flatten(&s).unwrap();
		assert_eq!(records.len(), 3);
		let names: Vec<(&str, &str)> = records.iter().map(|r| (&*r.province, &*r.city)).collect();
		assert_eq!(names, vec![("湖北", "武汉"), ("湖北", "黄冈"), ("广东", "深圳")]);
		for r in records.iter() {
			assert_eq!(r.date, s.last_update);
		}
		assert_eq!(records[1].total_confirm, 1645);
		assert_eq!(records[1].today_confirm, 1);
	}

	#[test]
	fn flattening_twice_does_not_accumulate() {
		let s = snapshot(vec![province("湖北", &[("武汉", 1), ("黄冈", 2)])]);
		assert_eq!(flatten(&s).unwrap().len(), 2);
		assert_eq!(flatten(&s).unwrap().len(), 2);
	}

	#[test]
	fn empty_area_tree_is_an_error() {
		let mut s = snapshot(Vec::new());
		s.country = None;
		match flatten(&s) {
			Err(Error::MalformedPayload(PayloadError::NoCountry)) => (),
			other => panic!("expected NoCountry, got {:?}", other),
		}
	}

	#[test]
	fn date_column_copies_last_update_verbatim() {
		let mut s = snapshot(vec![province("湖北", &[("武汉", 1)])]);
		s.last_update = "2020/02/05 10:23".into();
		assert_eq!(flatten(&s).unwrap()[0].date, "2020/02/05 10:23");
	}
}

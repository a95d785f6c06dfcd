use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use super::error::Result;
use super::feed::Snapshot;
use super::flatten::{flatten, CityRecord};


static UTF8_BOM: &'static [u8] = b"\xef\xbb\xbf";


/// Writes the records as CSV with a header row. A UTF-8 BOM goes first so
/// spreadsheet applications do not misread the Chinese column names.
pub fn write_table<W: io::Write>(mut w: W, records: &[CityRecord]) -> Result<()> {
	w.write_all(UTF8_BOM)?;
	let mut w = csv::Writer::from_writer(w);
	if records.is_empty() {
		// serialize() only emits headers together with the first row
		w.write_record(&CityRecord::COLUMNS)?;
	}
	for rec in records.iter() {
		w.serialize(rec)?;
	}
	w.flush()?;
	Ok(())
}


/// Flattens `snapshot` and overwrites `path` with the table. Returns the
/// number of data rows.
pub fn export_table<P: AsRef<Path>>(snapshot: &Snapshot, path: P) -> Result<usize> {
	let records = flatten(snapshot)?;
	let f = fs::File::create(path.as_ref())?;
	write_table(io::BufWriter::new(f), &records[..])?;
	debug!("wrote {} rows to {}", records.len(), path.as_ref().display());
	Ok(records.len())
}


#[cfg(test)]
mod tests {
	use super::*;

	fn record(province: &str, city: &str, total_confirm: u64) -> CityRecord {
		CityRecord{
			date: "2020-02-05 10:23:14".into(),
			province: province.into(),
			city: city.into(),
			today_confirm: 1,
			today_heal: 2,
			today_dead: 3,
			total_confirm,
			total_heal: 5,
			total_dead: 6,
		}
	}

	fn read_back(buf: &[u8]) -> (Vec<String>, Vec<Vec<String>>) {
		assert!(buf.starts_with(UTF8_BOM));
		let mut r = csv::Reader::from_reader(&buf[UTF8_BOM.len()..]);
		let headers = r.headers().unwrap().iter().map(|s| s.to_string()).collect();
		let rows = r.records()
			.map(|row| row.unwrap().iter().map(|s| s.to_string()).collect())
			.collect();
		(headers, rows)
	}

	#[test]
	fn header_and_columns_in_record_order() {
		let mut buf = Vec::new();
		write_table(&mut buf, &[record("湖北", "武汉", 10117), record("湖北", "黄冈", 1645)]).unwrap();
		let (headers, rows) = read_back(&buf);
		assert_eq!(headers, CityRecord::COLUMNS.to_vec());
		assert_eq!(rows.len(), 2);
		assert_eq!(rows[0], vec!["2020-02-05 10:23:14", "湖北", "武汉", "1", "2", "3", "10117", "5", "6"]);
		assert_eq!(rows[1][2], "黄冈");
	}

	#[test]
	fn empty_table_still_has_header() {
		let mut buf = Vec::new();
		write_table(&mut buf, &[]).unwrap();
		let (headers, rows) = read_back(&buf);
		assert_eq!(headers, CityRecord::COLUMNS.to_vec());
		assert!(rows.is_empty());
	}
}

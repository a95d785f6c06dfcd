use std::path::{Path, PathBuf};

use log::info;

use super::chart::{LineChart, MapChart};
use super::error::Result;
use super::export::export_table;
use super::feed::{decode_feed, Snapshot};
use super::fetch::Client;
use super::flatten::flatten;
use super::ioutil::read_saved_feed;
use super::naive_today;
use super::settings::Settings;


#[derive(Debug, Clone)]
pub struct Report {
	pub rows: usize,
	pub table: PathBuf,
	pub map_chart: PathBuf,
	pub line_chart: PathBuf,
}


/// Table, then map, then line chart, from one snapshot. Stops at the first
/// fault; files written before it stay on disk.
pub fn render_all(snapshot: &Snapshot, settings: &Settings) -> Result<Report> {
	let table = settings.table_path();
	info!("exporting table to {} ...", table.display());
	let rows = export_table(snapshot, &table)?;
	info!("{} city rows as of {}", rows, snapshot.last_update);

	let map_chart = settings.map_path();
	info!("rendering map chart to {} ...", map_chart.display());
	let records = flatten(snapshot)?;
	MapChart::from_records(&records[..], settings.date).render(&map_chart)?;

	let line_chart = settings.line_path();
	info!("rendering line chart to {} ...", line_chart.display());
	LineChart::from_daily(&snapshot.daily[..]).render(&line_chart)?;

	Ok(Report{rows, table, map_chart, line_chart})
}


/// Fetches the feed once and renders everything from it.
pub fn run(settings: &Settings) -> Result<Report> {
	let client = Client::new(settings.feed_url.clone());
	info!("fetching {} ...", client.feed_url());
	let snapshot = client.fetch_snapshot()?;
	render_all(&snapshot, settings)
}


/// Renders a saved feed into `output_dir`. Chart names carry the date of the
/// snapshot's `lastUpdateTime` (today if it has none), not the replay date.
pub fn replay<P: AsRef<Path>>(feed: P, output_dir: &Path) -> Result<Report> {
	let body = read_saved_feed(feed)?;
	let snapshot = decode_feed(&body[..])?;
	let settings = Settings{
		output_dir: output_dir.to_path_buf(),
		date: snapshot.last_update_date().unwrap_or_else(naive_today),
		..Settings::default()
	};
	render_all(&snapshot, &settings)
}

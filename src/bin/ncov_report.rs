use log::info;

use ncov::Settings;


fn main() -> Result<(), Box<dyn std::error::Error>> {
	ncov::init_logging();
	let report = ncov::run(&Settings::default())?;
	info!("table:      {} ({} rows)", report.table.display(), report.rows);
	info!("map chart:  {}", report.map_chart.display());
	info!("line chart: {}", report.line_chart.display());
	Ok(())
}

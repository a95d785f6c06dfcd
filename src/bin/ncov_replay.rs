use std::path::Path;

use log::info;


fn main() -> Result<(), Box<dyn std::error::Error>> {
	ncov::init_logging();
	let argv: Vec<String> = std::env::args().collect();
	let (feed, output_dir) = match &argv[1..] {
		[feed] => (feed, Path::new(".")),
		[feed, dir] => (feed, Path::new(dir)),
		_ => return Err("usage: ncov_replay <saved feed> [output dir]".into()),
	};
	info!("replaying {} into {} ...", feed, output_dir.display());
	let report = ncov::replay(feed, output_dir)?;
	info!("{} rows, charts at {} and {}", report.rows, report.map_chart.display(), report.line_chart.display());
	Ok(())
}

use std::fs;

use log::info;

use ncov::Client;


fn main() -> Result<(), Box<dyn std::error::Error>> {
	ncov::init_logging();
	let argv: Vec<String> = std::env::args().collect();
	let out = match argv.get(1) {
		Some(v) => v,
		None => return Err("usage: ncov_dump <output file>".into()),
	};
	let client = Client::default();
	info!("fetching {} ...", client.feed_url());
	let body = client.fetch_feed()?;
	// refuse to save something replay could not read
	ncov::decode_feed(&body[..])?;
	fs::write(out, &body[..])?;
	info!("saved {} bytes to {}", body.len(), out);
	Ok(())
}

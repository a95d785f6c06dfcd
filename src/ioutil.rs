use std::fs;
use std::io;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;


/// Opens a saved feed body, decompressing on the fly when the file name
/// ends in `.gz`.
pub fn magic_open<P: AsRef<Path>>(path: P) -> io::Result<Box<dyn Read>> {
	let path = path.as_ref();
	let f = fs::File::open(path)?;
	match path.extension() {
		Some(x) if x == "gz" => Ok(Box::new(GzDecoder::new(io::BufReader::new(f)))),
		_ => Ok(Box::new(io::BufReader::new(f))),
	}
}


pub fn read_saved_feed<P: AsRef<Path>>(path: P) -> io::Result<Vec<u8>> {
	let mut buf = Vec::new();
	magic_open(path)?.read_to_end(&mut buf)?;
	Ok(buf)
}

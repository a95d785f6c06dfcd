use log::{debug, trace};

use bytes::Bytes;

use super::error::Result;
use super::feed::{decode_feed, Snapshot};


pub static FEED_URL: &'static str = "https://view.inews.qq.com/g2/getOnsInfo?name=disease_h5";


pub struct Client {
	client: reqwest::blocking::Client,
	feed_url: String,
}

impl Client {
	pub fn new(feed_url: String) -> Self {
		Self{
			client: reqwest::blocking::Client::new(),
			feed_url,
		}
	}

	pub fn feed_url(&self) -> &str {
		&self.feed_url
	}

	/// Raw response body of one GET. Non-success statuses are errors, and
	/// nothing is retried.
	pub fn fetch_feed(&self) -> Result<Bytes> {
		trace!("GET {}", self.feed_url);
		let resp = self.client.get(self.feed_url.clone()).send()?;
		let resp = resp.error_for_status()?;
		let body = resp.bytes()?;
		debug!("received {} bytes from feed", body.len());
		Ok(body)
	}

	pub fn fetch_snapshot(&self) -> Result<Snapshot> {
		let body = self.fetch_feed()?;
		decode_feed(&body[..])
	}
}

impl Default for Client {
	fn default() -> Self {
		Self::new(FEED_URL.into())
	}
}

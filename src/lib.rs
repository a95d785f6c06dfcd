use chrono::{Local, NaiveDate};

pub mod chart;
mod error;
mod export;
mod feed;
mod fetch;
mod flatten;
mod ioutil;
mod pipeline;
mod settings;

pub use ioutil::{magic_open, read_saved_feed};
pub use error::*;
pub use export::*;
pub use feed::*;
pub use fetch::*;
pub use flatten::*;
pub use pipeline::*;
pub use settings::*;


pub fn naive_today() -> NaiveDate {
	Local::now().date_naive()
}


/// Logging setup shared by the binaries; `RUST_LOG` overrides the default
/// `info` level.
pub fn init_logging() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

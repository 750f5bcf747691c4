mod aggregate;
mod charset;
mod config;
pub mod fs;
mod kwh;
mod record;
mod report;
mod stations;
pub mod table;

pub use aggregate::Aggregate;
pub use charset::Charset;
pub use config::Config;
pub use fs::Fs;
pub use kwh::Kwh;
pub use record::Layout;
pub use record::Record;
pub use record::RecordError;
pub use record::Totals;
pub use report::Csv;
pub use stations::Stations;

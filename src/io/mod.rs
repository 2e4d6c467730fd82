pub mod blocklist;
pub mod csv_read;
pub mod csv_write;

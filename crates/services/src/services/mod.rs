pub mod archive_sweep;
pub mod board;

mod boundary;
mod format_time;
mod fps_limit;
mod parse_rle;

pub use boundary::Boundary;
pub use format_time::format_duration;
pub use fps_limit::FpsLimiter;
pub use parse_rle::parse_rle;

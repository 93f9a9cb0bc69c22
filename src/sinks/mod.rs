mod animate;
mod display;
mod persist;
mod print;

pub use animate::GifSink;
pub use display::{DisplaySink, LiveFrame};
pub use persist::{read_log, read_log_file, PersistSink, SEPARATOR};
pub use print::PrintSink;

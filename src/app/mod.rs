mod app;
mod watch;

pub use app::App;
pub use watch::{Watch, parse_numeric};

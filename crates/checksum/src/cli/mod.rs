mod app;
mod run;

pub use app::App;
pub use run::{run, write_checksums};

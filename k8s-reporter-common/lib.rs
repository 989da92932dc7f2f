pub mod logging;

pub const APP_NAME: &str = "kreport";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

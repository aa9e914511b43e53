pub mod banner;
pub mod batch;
pub mod config;
pub mod error;
pub mod flow;
pub mod fonts;
pub mod logging;
pub mod menu;
pub mod prompt;
pub mod raster;
pub mod save;
pub mod select;
pub mod validate;

pub use banner::BannerRequest;
pub use config::Config;
pub use fonts::FontCatalog;
pub use prompt::Console;

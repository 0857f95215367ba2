pub mod config;
pub mod constants;
pub mod controller;
pub mod discretize;
pub mod domain;
pub mod error;
pub mod format;
pub mod gesture;
pub mod haptics;
pub mod marks;
pub mod snap;
pub mod view;

pub use config::*;
pub use controller::*;
pub use discretize::*;
pub use domain::*;
pub use error::*;
pub use format::*;
pub use gesture::*;
pub use haptics::*;
pub use marks::*;
pub use snap::*;
pub use view::*;

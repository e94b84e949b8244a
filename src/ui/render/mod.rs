mod all;
mod dashboard;
mod footer;
mod log;
mod panel;

use self::log::log;
use super::Frame;
use dashboard::dashboard;
use footer::footer;

pub use all::all as render;
pub use panel::{panel, panel_height};

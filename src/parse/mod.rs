mod tags;
mod threshold;

pub use tags::{get_tag, set_tag};
pub use threshold::parse_threshold;

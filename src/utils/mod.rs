mod string;

pub use string::{extract_last_segment, namespace_of, split_top_level};

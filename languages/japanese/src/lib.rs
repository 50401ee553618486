pub mod jisho;
pub mod pos;

pub use jisho::{JishoClient, JishoResponse, parse_response};
pub use pos::{PosTag, classify, classify_labels, classify_verb};

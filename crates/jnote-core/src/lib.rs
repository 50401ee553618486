pub mod lexicon;
pub mod sink;
pub mod types;

pub use lexicon::{Lexicon, LookupError};
pub use sink::RecordSink;
pub use types::{DictionaryEntry, MAX_SENSES, Sense};

//! Word lists and word validation
//!
//! Where targets come from, and how guesses are judged to be real words.

mod builtin;
pub mod loader;
mod source;
mod table;
mod validator;

pub use builtin::BUILTIN_WORDS;
pub use loader::FileSource;
pub use source::{BuiltinSource, Source, WordSource, WordSourceError, load_word_table};
pub use table::WordTable;
pub use validator::{AcceptAll, TableValidator, Validator, ValidatorError, WordValidator};

//! Translation core for moving Hive SQL to an ANSI-dialect engine.
//!
//! The [`source`] module models the Hive parse tree as the grammar hands
//! it over; [`ast`] models the target dialect. [`translator::Translator`]
//! rewrites the former into the latter in a single pass, collecting
//! conversion notices for the rewrites that lose information, and fails
//! fast with a located [`error::TranslateError`] on anything the target
//! cannot express.

pub mod ast;
pub mod error;
pub mod location;
pub mod source;
pub mod translator;

pub use translator::Translator;

pub mod prelude {
    pub use crate::error::{TranslateError, TranslateResult};
    pub use crate::location::Location;
    pub use crate::translator::{
        DecimalLiteralPolicy, Translated, Translator, TranslatorOptions,
    };
}

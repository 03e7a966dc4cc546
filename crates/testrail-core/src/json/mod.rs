//! Conversion helpers between wire JSON and record fields.
//!
//! - [`fields`]: typed readers used by every `Record::parse`
//! - [`sparse`]: conditional object builder used by every `Record::to_json`

pub mod fields;
pub mod sparse;

pub use fields::Fields;
pub use sparse::SparseObject;

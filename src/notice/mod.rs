//! Notice discovery: deciding what in a file is a license notice and which
//! notices count as the same license.
//!
//! - [`extractor`] — classifies files by name and pulls candidate notices out
//!   of standalone `LICENSE` files or `/* ... */` comment blocks.
//! - [`normalize`] — maps a notice text to its grouping key.
//! - [`mime`] — extension-based type guessing and the skip list.

pub mod extractor;
pub mod mime;
pub mod normalize;

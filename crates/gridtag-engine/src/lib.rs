//! gridtag_engine - Selection expression parsing and formatting.

pub mod selection;

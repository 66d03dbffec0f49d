//! Mixed-content conversion tests
//!
//! Fragments are parsed from real XML so the text / tail model is exercised
//! exactly as the loader builds it.

mod inline;
mod lists;
mod verbatim;

//! End-to-end tests of `friends!`.
//!
//! Each file keeps its owner types in a `model` module and reaches their
//! private members from the outside through the generated accessors.

mod audit;
mod field;
mod nesting;
mod statics;

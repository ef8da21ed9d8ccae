//! Reader and writer for chess Tournament Report Files (TRF).
//!
//! A report is a fixed-column text file: every line starts with a three
//! character record code followed by the record's columns. [`loads`] turns
//! the text into a [`Tournament`], [`dumps`] turns it back.
//!
//! ```
//! let t = chess_trf::loads("012 Spring Open\n022 Hamburg\n").unwrap();
//! assert_eq!(t.city, "Hamburg");
//! assert_eq!(chess_trf::dumps(&t), "012 Spring Open\n022 Hamburg\n");
//! ```

pub mod trf;

pub use trf::*;

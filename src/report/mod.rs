//! Schedule report assembly and rendering.
//!
//! The assembler folds per-slot assignments into a [`ScheduleMatrix`](crate::models::ScheduleMatrix);
//! the delimited writer renders that matrix as text.

mod assembler;
mod delimited;

pub use assembler::{LIST_SEPARATOR, assemble};
pub use delimited::{HEADER_LABEL, render, to_delimited};

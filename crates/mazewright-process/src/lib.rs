//! The stepwise process protocol shared by every search and generator.
//!
//! A [`Process`] owns one [`Grid`](mazewright_grid::Grid) and advances
//! it by exactly one observable mutation per [`Process::step`] call.
//! Drivers call `step()` in a loop under their own pacing, pause, and
//! cancellation policy; nothing inside a process ever sleeps or blocks.
//!
//! [`Trail`] and [`PathTrace`] are the bookkeeping pieces the searches
//! share: a parent-pointer arena for partial routes, and the
//! one-cell-per-step marking of a found route.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod process;
pub mod trace;
pub mod trail;

pub use process::{Process, Step};
pub use trace::PathTrace;
pub use trail::{Trail, TrailId};

//! Raw luma frame views and I/O helpers.
//!
//! - [`FrameView`]: borrowed single-channel view over caller-owned memory,
//!   carrying row/pixel stride and a monotonic timestamp. Never retained past
//!   one analysis call.
//! - [`OwnedFrame`]: owned buffer used by tests and demos.
//! - [`io`]: grayscale image loading and JSON writing for the demo tools.

pub mod io;

mod frame;

pub use frame::{FrameView, OwnedFrame};

//! Synchronous camera capture.
//!
//! `VideoIn` owns one capture device and hands out frames one blocking call
//! at a time. Backends implement `VideoInDevice`; V4L2 is the default.

mod videoerror;
pub use videoerror::*;

mod videoframe;
pub use videoframe::*;

pub mod videoin;
pub use videoin::*;

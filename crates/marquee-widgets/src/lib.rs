#![forbid(unsafe_code)]

//! Headless widgets for Marquee.
//!
//! - [`carousel`]: queued, auto-advancing, wrap-around item rotator.
//! - [`visibility`]: nested scroll and intersection tracking.
//!
//! Both are plain state machines. Hosts feed them time (`tick`) and viewport
//! events, then draw from the values they expose.

pub mod carousel;
pub mod visibility;

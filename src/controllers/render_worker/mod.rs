//! Background rendering with latest-request-wins scheduling.
//!
//! At most one render runs at a time. Requests submitted while it runs
//! overwrite each other in a single slot, so only the newest one is rendered
//! next. Results that are already superseded when they finish are dropped
//! instead of being presented.

pub mod events;
mod worker;

pub use worker::RenderWorker;

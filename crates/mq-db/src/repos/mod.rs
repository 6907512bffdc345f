//! Repository methods on `MarqueeService`, one module per concern.

pub mod audit;
pub mod resolve;
pub mod schedule;
pub mod swap;
pub mod template;

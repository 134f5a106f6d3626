//! Reference hosts.
//!
//! - [`MemoryHost`]: an in-process host that satisfies every host contract
//! - [`TracingHost`]: wraps any host and logs what is registered with it

pub mod memory;
pub mod tracing;

pub use memory::MemoryHost;
pub use self::tracing::TracingHost;

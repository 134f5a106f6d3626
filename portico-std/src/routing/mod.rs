//! # Router Backends
//!
//! Path routers a host can build from a route table.
//!
//! # Choosing a Router
//!
//! | Router | Matching | Duplicates |
//! |--------|----------|------------|
//! | [`OrderedRouter`] | Exact, first match wins, `**` fallback | Rejected, or shadowed with `allow_duplicates()` |
//! | [`HashMapRouter`] | Exact | Rejected, or last wins with `allow_duplicates()` |
//! | `MatchitRouter` | `{param}` and `{*rest}` patterns (`matchit` feature) | Rejected |

pub mod hashmap;
#[cfg(feature = "matchit")]
pub mod matchit;
pub mod ordered;

pub use hashmap::{HashMapRouter, HashMapRouterBuilder};
#[cfg(feature = "matchit")]
pub use self::matchit::{MatchitRouter, MatchitRouterBuilder};
pub use ordered::{OrderedRouter, OrderedRouterBuilder};

//! HTTP API integration tests.
//!
//! Each test starts the router on a random port and drives it with reqwest.

mod counters;
mod degraded;
mod numerics;

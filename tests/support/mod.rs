// tests/support/mod.rs
// Shared mocks and builders used by multiple integration test binaries.
// Individual test crates only use a subset of these symbols, which would
// otherwise trip dead_code / unused_imports warnings.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use mocks::*;

//! Test doubles and harness for gridsync integration tests.


pub use helpers::{LocalEndpoint, LocalHub, MemoryGrid, TestObserver, TestRig, TestTile};

//! Internal test tree: shared fixtures, mockall-based collaborator tests,
//! and property-based invariant tests.

mod mocks;
mod property;
mod unit;

//! Game setup: the name-registration step.
//!
//! A game begins by registering player names and choosing a board; the
//! builder turns that into an engine plus a fresh state. Resetting is
//! building again: states are plain values with no teardown.

mod builder;

pub use builder::GameBuilder;

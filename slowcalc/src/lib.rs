//! SlowCalc - A calculator for the Slow Computer
//!
//! The engine is a two-operand accumulator fed one button event at a time;
//! the egui front end only forwards events and shows [`Calculator::display`].

pub mod app;
pub mod engine;
pub mod event;
pub mod keys;
pub mod settings;

pub use engine::{Calculator, EngineState};
pub use event::{Event, Operator, ParseEventError};

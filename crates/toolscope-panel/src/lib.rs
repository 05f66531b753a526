pub mod controller;
pub mod display;
pub mod observable;
pub mod registry;

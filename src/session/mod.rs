//! Front-end glue around the rules: the input adapter, the new-game
//! control, the AI toggle and pointer hit-testing.

mod controller;
pub mod layout;

pub use controller::Session;
pub use layout::BoardLayout;

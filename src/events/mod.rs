pub mod menu;
pub mod pointer;

pub use menu::{wire_contact_menu, wire_menu_buttons};
pub use pointer::{wire_input_handlers, InputWiring};

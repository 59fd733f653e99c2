mod core;
pub use core::{MODEL, Message, Role, completion};

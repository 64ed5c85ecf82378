pub mod contact;
pub mod content;
mod macros;

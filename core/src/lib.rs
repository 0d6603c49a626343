#![no_std]

pub mod color;
pub mod frame;
pub mod header;
pub mod ident;
pub mod natural;

extern crate alloc;

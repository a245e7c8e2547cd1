#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;

mod entry;
pub mod leftist_heap;

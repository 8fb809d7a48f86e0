// Local UI state, kept free of framework types so it tests on the host.

pub mod disclosure;
pub mod page;
pub mod reveal;
pub mod selector;

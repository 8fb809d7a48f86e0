// Page-level composition

mod demo;
mod home;

pub use demo::DemoPage;
pub use home::HomePage;

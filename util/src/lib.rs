pub mod locator;
pub mod output;

pub mod history;
pub mod product;

pub use history::*;
pub use product::*;

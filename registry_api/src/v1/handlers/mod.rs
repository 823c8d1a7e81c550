pub mod factories;
pub mod networks;
pub mod objects;

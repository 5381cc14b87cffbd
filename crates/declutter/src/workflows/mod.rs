pub mod inventory;
pub mod recommendation;

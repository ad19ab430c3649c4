pub mod app;
pub mod config;
pub mod cooking;
pub mod eaten;
pub mod eating_out;
pub mod error;
pub mod ingredients;
pub mod inventory;
pub mod ledger;
pub mod nutrition;
pub mod pagination;
pub mod planning;
pub mod recipes;
pub mod snacks;
pub mod state;
pub mod summary;

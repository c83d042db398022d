//! Page inventory: the routes and doc ids navigation may point at.

mod inventory;
mod scan;

pub use inventory::{PageInventory, PageInventoryBuilder};

pub mod commands;
pub mod grid;
pub mod layout;
pub mod resolver;
pub mod session;

pub use commands::MultiviewCommand;
pub use grid::{default_grid, GridItem, GRID_COLUMNS, MAX_GRID_ROWS};
pub use layout::LayoutEngine;
pub use resolver::{resolve, Layout, LayoutResolver};
pub use session::MultiviewSession;

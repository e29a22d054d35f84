pub mod history;
pub mod theme;

pub mod components;
pub mod export;
pub mod pages;
pub mod shell;
pub mod theme;

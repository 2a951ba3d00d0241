pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod movie_grid;
pub mod movie_modal;
pub mod mvi;
pub mod pagination;
pub mod render;
pub mod runtime;
pub mod search;
pub mod search_bar;
pub mod terminal_guard;
pub mod theme;
pub mod toast;

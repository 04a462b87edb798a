// Widget rendering functions, one module per dashboard zone.

pub mod board;
pub mod clue_panel;
pub mod help_bar;
pub mod message;
pub mod status_bar;

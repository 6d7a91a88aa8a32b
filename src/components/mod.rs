pub mod hooks;
pub mod layout;
pub mod post_tree;
pub mod toc;
pub mod ui;

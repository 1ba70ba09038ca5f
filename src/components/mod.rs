pub mod canvas;
pub mod presenter;
pub mod scene;
pub mod snow;
pub mod tree;

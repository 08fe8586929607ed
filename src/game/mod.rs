pub mod display;
pub mod engine;
pub mod input;
pub mod r#loop; // `loop` is reserved keyword, need to escape with `r#`
pub mod mode;

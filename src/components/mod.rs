// src/components/mod.rs
pub mod embed_stage;
pub mod gallery;

pub use embed_stage::EmbedStage;
pub use gallery::Gallery;

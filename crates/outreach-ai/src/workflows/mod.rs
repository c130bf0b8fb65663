pub mod linkedin;
pub mod prospects;

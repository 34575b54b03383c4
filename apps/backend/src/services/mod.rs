pub mod games;
pub mod locks;

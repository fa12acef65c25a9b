pub mod file;
pub mod fixed;
pub mod simplywallst;

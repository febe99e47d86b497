pub mod descriptors;
pub mod index;

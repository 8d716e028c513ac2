pub mod identifier;
pub mod normalizer;

pub use identifier::extract_identifier;
pub use normalizer::normalize;

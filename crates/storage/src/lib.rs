#![forbid(unsafe_code)]

pub mod fs;
pub mod layout;
pub mod repository;

pub use layout::CurriculumLayout;
pub use repository::{
    CompletionRepository, CurriculumRepository, InMemoryRepository, Storage, StorageError,
};

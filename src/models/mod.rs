mod entry;
mod photo;
mod vote;

pub use entry::TiiEntry;
pub use photo::{PhotoDescriptor, PhotoSource};
pub use vote::VoteCounts;

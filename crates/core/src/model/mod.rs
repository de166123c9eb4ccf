mod location;

pub use location::{LocationDataset, StackRange};

mod stores;
mod viewer;

pub use stores::*;
pub use viewer::*;

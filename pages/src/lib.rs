pub mod home;
pub mod store_view;
pub mod stores;

pub use store_view::ViewerState;
pub use stores::StoreForm;

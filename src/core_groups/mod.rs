// Lookup-only stores over the group and group shadow files

pub mod group_store;
pub mod gshadow_store;

pub use group_store::GroupStore;
pub use gshadow_store::GroupShadowStore;

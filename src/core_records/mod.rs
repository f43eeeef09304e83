// Parsing of the colon-delimited account database files

pub mod error;
pub mod fields;
pub mod group;
pub mod gshadow;
pub mod passwd;
pub mod reader;
pub mod shadow;

pub use error::StoreError;
pub use group::GroupEntry;
pub use gshadow::GroupShadowEntry;
pub use passwd::PasswdEntry;
pub use shadow::ShadowEntry;

pub mod activate;
pub mod classes;
pub mod element;
pub mod query;

pub use activate::{activate_column, activate_column_in, ActivateError, ACTIVE_CLASS};
pub use classes::ClassList;
pub use element::{find_element, find_element_mut, Content, Element, Tag};
pub use query::elements_by_class;

/// Conventional id of the container that holds the comparison tables.
pub const FEATURES_TABLE_ID: &str = "features_table";

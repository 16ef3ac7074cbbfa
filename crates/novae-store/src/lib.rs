pub mod descriptor;
pub mod layout;

pub use descriptor::DescriptorStore;
pub use layout::StoreLayout;

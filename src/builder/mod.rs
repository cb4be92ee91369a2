pub mod page;
pub mod site;

pub use site::Site;

pub mod collection;
pub mod immutable_list;
pub mod shared;

pub mod dynamodb;
#[cfg(any(test, feature = "test-helpers"))]
pub mod memory;
pub mod ride_store;

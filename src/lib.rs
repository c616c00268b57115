pub mod console;
pub mod shutdown;
pub mod state;
pub mod timing;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

pub mod params;
#[cfg(test)]
pub(crate) mod testing;

pub use params::InvalidParam;

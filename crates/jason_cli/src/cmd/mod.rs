/// Decode and re-encode command.
pub mod fmt;
/// Typed key-path lookup command.
pub mod get;
/// Object key listing command.
pub mod keys;

#[cfg(test)]
mod test_support;
mod util;

/// Record catalog listing command.
pub mod catalog;
/// Value tree printing helpers.
pub mod print;
/// Snapshot accessor output command.
pub mod show;
/// Shared rendering helpers.
pub(crate) mod util;

#[cfg(test)]
pub(crate) mod test_support;

pub(crate) mod sealed;
pub(crate) mod serde;

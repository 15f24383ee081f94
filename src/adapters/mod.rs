// Adapters layer: one module per probe kind. Only the filesystem probe lives
// in this crate; TCP/HTTP siblings plug into the same registry from theirs.

pub mod fs;

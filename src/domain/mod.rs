// Domain layer: the ready-check capability every probe kind implements.
// No dependencies beyond the crate error type and async-trait.

pub mod ports;

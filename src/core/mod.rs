// Core modules implementing source classification, sniffing, canonical encoding, and the engine port.
pub mod canonical;
pub mod error;
pub mod olap;
pub mod protocol;
pub mod sniff;

//! Inbound adapters exposing the domain over transports.

pub mod http;

//! `inventrent-auth`: the operator login check.
//!
//! This crate is intentionally decoupled from the terminal and from config
//! loading: the CLI asks a [`CredentialCheck`] and never sees stored secrets.

pub mod credentials;

pub use credentials::{AuthError, CredentialCheck, Operator, StaticCredentials};

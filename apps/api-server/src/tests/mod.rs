//! In-process tests for the HTTP surface.
//!
//! Handlers run against in-memory repositories and a canned identity
//! verifier, so the full request/response contract is exercised without a
//! database or the network.


mod posts_api;

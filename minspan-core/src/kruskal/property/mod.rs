//! Property-based tests for the spanning forest builder.
//!
//! Verifies structural invariants (acyclicity, edge count, acceptance
//! order), minimality against an exhaustive spanning-forest enumeration
//! oracle on small graphs, and a differential run against a union-find
//! with path compression disabled.

mod helpers;
mod oracle;
mod strategies;

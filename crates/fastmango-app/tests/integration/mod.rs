//! Integration test modules.

mod composition;

//! Integration test suite entry point.

mod ingest_workflow;
mod repository_contract;

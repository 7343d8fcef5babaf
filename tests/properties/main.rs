//! Property test suite entry point.

mod catalog_properties;

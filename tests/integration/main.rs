//! Integration tests for bible-summary

mod pipeline_test;

//! Tests for the evaluator and its failure reporting.

mod failures;

//! Shared test utilities for mq-db tests.

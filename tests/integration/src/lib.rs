//! End-to-end tests for WS-Trust payload parsing live under `tests/`.

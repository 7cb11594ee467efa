//! Workspace-level integration tests for widecalc.

//! Workspace root package; hosts the cargo-husky git hooks.

//! Repository structure checks: every source file has a unit test file

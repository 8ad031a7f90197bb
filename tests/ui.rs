//! Rejected reinterpretations
//!
//! Each case under `tests/ui` must fail to compile with the diagnostic
//! recorded next to it. Refresh the recordings with `TRYBUILD=overwrite`.

#[test]
fn test_rejected_reinterpretations() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/*.rs");
}

use super::*;

#[test]
fn init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
}

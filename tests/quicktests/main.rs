//! Property tests exercising the public API with `quickcheck`.

mod graph;
mod tree;

/// Routes `log` output through the test harness. Safe to call from every test.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

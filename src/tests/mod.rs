extern crate std;



/// Route `log` output through the test harness; safe to call repeatedly.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[macro_export]
macro_rules! timer_debug {
    ($msg:literal,$block:expr) => {{
        let start = std::time::Instant::now();
        let result = $block;

        tracing::debug!("{}: Took {:?}", $msg, start.elapsed());

        result
    }};
}

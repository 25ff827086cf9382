//! tracing 구독자 초기화.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 로그 구독자를 설치한다. RUST_LOG 환경변수가 있으면 `level`보다 우선한다.
/// 로그는 stderr로 출력하여 결과 출력(stdout)과 섞이지 않게 한다.
pub fn init(level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

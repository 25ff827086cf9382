//! 전압강하 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 검증/계산 경로를 쓰도록 한다.

pub mod app;
pub mod cable;
pub mod calculator;
pub mod config;
pub mod logging;
pub mod report;
pub mod ui_cli;
pub mod units;

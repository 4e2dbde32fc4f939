pub mod access_log;
pub mod conf;
pub mod logging;
pub mod metrics;

//! Buffers client log lines so the UI can drain them into its own console.
//! Every line also goes to the `log` facade.

use once_cell::sync::Lazy;
use std::sync::Mutex;

static CLIENT_LOG_BUFFER: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(Vec::new()));

const MAX_BUFFER_LEN: usize = 500;

fn should_buffer(s: &str) -> bool {
    let lower = s.to_lowercase();
    // Always keep errors/warnings and auth signals.
    if lower.contains("error")
        || lower.contains("warn")
        || lower.contains("failed")
        || lower.contains("unauthorized")
        || lower.contains("forbidden")
    {
        return true;
    }

    // Keep the request/session trail; drop the rest to reduce noise.
    lower.contains("request")
        || lower.contains("session")
        || lower.contains("booking")
        || lower.contains("configured")
}

/// Push a log line. Called by the `client_log!` macro.
pub fn push(s: String) {
    log::info!("{}", s);
    if !should_buffer(&s) {
        return;
    }
    if let Ok(mut v) = CLIENT_LOG_BUFFER.lock() {
        v.push(s);
        let n = v.len();
        if n > MAX_BUFFER_LEN {
            v.drain(0..n - MAX_BUFFER_LEN);
        }
    }
}

/// Drain and clear buffered log lines.
pub fn drain_client_logs() -> Vec<String> {
    CLIENT_LOG_BUFFER
        .lock()
        .map(|mut v| std::mem::take(&mut *v))
        .unwrap_or_default()
}

#[macro_export]
macro_rules! client_log {
    ($($t:tt)*) => {
        $crate::log_bridge::push(format!($($t)*))
    };
}

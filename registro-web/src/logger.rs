//! Browser console logger

use log::Record;

/// One console line: `[LEVEL] target: message`
#[cfg_attr(not(target_family = "wasm"), allow(dead_code))]
fn format_line(record: &Record) -> String {
    format!("[{}] {}: {}", record.level(), record.target(), record.args())
}

#[cfg(target_family = "wasm")]
mod console {
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use wasm_bindgen::JsValue;

    /// `log` backend writing to `console.*`, one method per level
    struct ConsoleLogger;

    static LOGGER: ConsoleLogger = ConsoleLogger;

    impl Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let line = JsValue::from_str(&super::format_line(record));
            match record.level() {
                Level::Error => web_sys::console::error_1(&line),
                Level::Warn => web_sys::console::warn_1(&line),
                Level::Info => web_sys::console::info_1(&line),
                Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
            }
        }

        fn flush(&self) {}
    }

    /// Install the console logger at `level`.
    ///
    /// Only the first call installs; every call sets the level.
    pub fn init(level: LevelFilter) {
        if log::set_logger(&LOGGER).is_ok() {
            log::debug!("Console logger installed");
        }
        log::set_max_level(level);
    }
}

#[cfg(target_family = "wasm")]
pub use console::init;

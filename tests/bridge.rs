//! `log` facade records land in the matching categories.
#![cfg(feature = "log")]

use log::Log;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use termlog::Category;
use termlog::bridge::category_for;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn levels_map_to_categories() {
    assert_eq!(category_for(log::Level::Error), Category::Error);
    assert_eq!(category_for(log::Level::Warn), Category::Warning);
    assert_eq!(category_for(log::Level::Info), Category::Info);
    assert_eq!(category_for(log::Level::Debug), Category::Info);
    assert_eq!(category_for(log::Level::Trace), Category::Info);
}

// Single test: the global `log` logger can only be installed once per process.
#[test]
fn records_are_emitted_as_status_lines() {
    let capture = Capture::default();
    termlog::set_sink(termlog::Sink::writer(capture.clone()));
    termlog::bridge::init().unwrap();
    assert!(termlog::bridge::init().is_err());

    log::error!("failed {}", 1);
    log::warn!("careful");
    log::info!("fyi");
    log::debug!("details");
    log::logger().flush();

    let text = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
    assert_eq!(text, "[!!] failed 1\n[!] careful\n[·] fyi\n[·] details\n");
}

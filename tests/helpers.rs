#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use lightlog::{ColorMode, Config, Level, FILE_WIDTH};

// Global lock to serialize tests (the global logger is shared)
pub fn test_lock() -> MutexGuard<'static, ()> {
    static L: OnceLock<Mutex<()>> = OnceLock::new();
    L.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

#[derive(Clone, Default)]
pub struct Mem(pub Arc<Mutex<Vec<u8>>>);
impl Write for Mem {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(bytes);
        Ok(bytes.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
impl Mem {
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> (Box<dyn Write + Send>, Arc<Mutex<Vec<u8>>>) {
        let buf = Arc::new(Mutex::new(Vec::new()));
        (Box::new(Self(buf.clone())) as Box<dyn Write + Send>, buf)
    }
}

// Shared buffer for all tests (the global logger is installed once)
fn shared_buf() -> &'static Arc<Mutex<Vec<u8>>> {
    static BUF: OnceLock<Arc<Mutex<Vec<u8>>>> = OnceLock::new();
    BUF.get_or_init(|| Arc::new(Mutex::new(Vec::new())))
}

/// Installs the global logger on a memory sink (first caller wins) and clears it.
///
/// Global settings for every test binary that uses this: DEBUG threshold,
/// no termination, no color.
pub fn attach_mem_sink() -> Arc<Mutex<Vec<u8>>> {
    static INIT: OnceLock<()> = OnceLock::new();
    let buf = shared_buf().clone();
    INIT.get_or_init(|| {
        let cfg = Config::builder()
            .level(Level::Debug)
            .die_level(None)
            .color(ColorMode::Never)
            .writer(Box::new(Mem(buf.clone())))
            .build();
        lightlog::init(cfg).expect("global logger installed twice");
    });
    buf.lock().unwrap().clear();
    buf
}

/// Extract lines from buffer
pub fn lines_from(buf: &Arc<Mutex<Vec<u8>>>) -> Vec<String> {
    let bytes = buf.lock().unwrap().clone();
    String::from_utf8(bytes)
        .unwrap()
        .lines()
        .map(std::string::ToString::to_string)
        .collect()
}

/// One uncolored line split into its columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub time: String,
    pub tag: String,
    pub file: String,
    pub line: u32,
    pub indent: usize,
    pub body: String,
}

pub fn parse_line(s: &str) -> Option<Line> {
    let rest = s.strip_prefix('[')?;
    let (time, rest) = rest.split_once("][")?;
    let (tag, rest) = rest.split_once("]:")?;
    let file = rest.get(..FILE_WIDTH)?;
    let rest = rest[FILE_WIDTH..].strip_prefix(':')?;
    let (num, rest) = rest.split_once(':')?;
    let rest = rest.strip_prefix(' ')?;
    let body = rest.trim_start_matches(' ');
    Some(Line {
        time: time.to_owned(),
        tag: tag.to_owned(),
        file: file.to_owned(),
        line: num.trim_start().parse().ok()?,
        indent: (rest.len() - body.len()) / 2,
        body: body.to_owned(),
    })
}

pub fn parsed_from(buf: &Arc<Mutex<Vec<u8>>>) -> Vec<Line> {
    lines_from(buf)
        .iter()
        .map(|l| parse_line(l).unwrap_or_else(|| panic!("malformed line: {l:?}")))
        .collect()
}

pub type Buf = Arc<Mutex<Vec<u8>>>;

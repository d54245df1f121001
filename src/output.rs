// Output module - centralizes stdout behind one worker with level filtering
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU8, Ordering};
use tokio::sync::mpsc;

static VERBOSITY_LEVEL: AtomicU8 = AtomicU8::new(1);

pub fn set_verbosity_level(level: u8) {
    VERBOSITY_LEVEL.store(level, Ordering::Relaxed);
    if level > 1 {
        println!("📢 Verbosity level: {} (1=basic, 2=full)", level);
    }
}

pub fn get_verbosity_level() -> u8 {
    VERBOSITY_LEVEL.load(Ordering::Relaxed)
}

/// Output levels for filtering
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub enum OutputLevel {
    Error,
    Info,
    Debug,
    Trace,
}

/// All print statements funnel through one queue so interleaved tasks never
/// shred each other's lines.
#[derive(Clone)]
pub struct OutputBroker {
    sender: mpsc::UnboundedSender<OutputRequest>,
}

pub struct OutputRequest {
    pub level: OutputLevel,
    pub message: String,
}

impl OutputBroker {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        tokio::spawn(Self::broker_worker(receiver));
        Self { sender }
    }

    /// Queue a message; dropped silently if the worker is gone.
    pub fn output(&self, level: OutputLevel, message: String) {
        let _ = self.sender.send(OutputRequest { level, message });
    }

    async fn broker_worker(mut receiver: mpsc::UnboundedReceiver<OutputRequest>) {
        while let Some(request) = receiver.recv().await {
            let should_show = match request.level {
                OutputLevel::Error => true,
                OutputLevel::Info => get_verbosity_level() >= 1,
                OutputLevel::Debug | OutputLevel::Trace => get_verbosity_level() >= 2,
            };
            if should_show {
                println!("{}", request.message);
            }
        }
    }
}

impl Default for OutputBroker {
    fn default() -> Self {
        Self::new()
    }
}

/// Global output broker instance
static GLOBAL_BROKER: OnceLock<OutputBroker> = OnceLock::new();

pub fn get_output_broker() -> &'static OutputBroker {
    GLOBAL_BROKER.get_or_init(OutputBroker::new)
}

// Global output macros that work anywhere
#[macro_export]
macro_rules! o_error {
    ($($arg:tt)*) => {{
        $crate::output::get_output_broker()
            .output($crate::output::OutputLevel::Error, format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! o_info {
    ($($arg:tt)*) => {{
        $crate::output::get_output_broker()
            .output($crate::output::OutputLevel::Info, format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! o_debug {
    ($($arg:tt)*) => {{
        $crate::output::get_output_broker()
            .output($crate::output::OutputLevel::Debug, format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! o_trace {
    ($($arg:tt)*) => {{
        $crate::output::get_output_broker()
            .output($crate::output::OutputLevel::Trace, format!($($arg)*));
    }};
}

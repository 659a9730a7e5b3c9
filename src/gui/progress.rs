// src/gui/progress.rs
use crate::progress::Progress;

/// Writes load progress into the App's status line.
pub struct GuiProgress<'a> {
    status: &'a mut String,
    done: usize,
    total: usize,
}

impl<'a> GuiProgress<'a> {
    pub fn new(status: &'a mut String) -> Self {
        Self { status, done: 0, total: 0 }
    }
    fn set_status(&mut self, msg: impl Into<String>) {
        *self.status = msg.into();
    }
}

impl Progress for GuiProgress<'_> {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn step_done(&mut self, step: &str) {
        self.done += 1;
        let msg = format!("Loaded {} ({}/{})", step, self.done, self.total);
        self.set_status(msg);
    }
    // finish: the last log line ("N site(s) loaded") stays up
}

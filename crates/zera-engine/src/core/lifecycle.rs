use crate::input::{InputFrame, InputState, Key};

/// Control directive for the loop.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Where the process is in its life.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    /// Window, GPU and scene are being acquired.
    Initializing,
    /// Frames are being produced.
    Looping,
    /// The close flag was observed; resources are being released.
    TearingDown,
}

/// Loop state machine: `Initializing -> Looping -> TearingDown`.
///
/// The close flag may be raised at any time (Escape, the window's close button,
/// a fatal surface error). It is observed at the top of the next iteration.
#[derive(Debug)]
pub struct Lifecycle {
    phase: Phase,
    close_requested: bool,
    iterations: u64,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            phase: Phase::Initializing,
            close_requested: false,
            iterations: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Completed loop iterations.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Startup finished; frames may be produced.
    pub fn enter_loop(&mut self) {
        if self.phase == Phase::Initializing {
            self.phase = Phase::Looping;
            log::info!("entering render loop");
        }
    }

    pub fn request_close(&mut self) {
        if !self.close_requested {
            log::info!("close requested");
        }
        self.close_requested = true;
    }

    /// Polls the recognized input: Escape held, or pressed at any point this
    /// frame, raises the close flag.
    pub fn process_input(&mut self, input: &InputState, frame: &InputFrame) {
        if input.key_down(Key::Escape) || frame.pressed(Key::Escape) {
            self.request_close();
        }
    }

    /// Top-of-loop check.
    ///
    /// Returns `Exit` once the close flag is set, moving to `TearingDown`.
    pub fn begin_iteration(&mut self) -> AppControl {
        match self.phase {
            Phase::Initializing if self.close_requested => {
                self.phase = Phase::TearingDown;
                AppControl::Exit
            }
            Phase::Initializing => AppControl::Continue,
            Phase::Looping if self.close_requested => {
                self.phase = Phase::TearingDown;
                log::info!("leaving render loop after {} iterations", self.iterations);
                AppControl::Exit
            }
            Phase::Looping => {
                self.iterations += 1;
                AppControl::Continue
            }
            Phase::TearingDown => AppControl::Exit,
        }
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

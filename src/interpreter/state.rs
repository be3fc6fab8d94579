/// Code and refinement progress for one command execution.
///
/// `iteration_count` only moves through [`RunState::record_refinement`], one step at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunState {
    current_code: String,
    iteration_count: u32,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last extracted or refined code; empty until the first extraction
    pub fn current_code(&self) -> &str {
        &self.current_code
    }

    /// Number of successful refinements so far
    pub fn iteration_count(&self) -> u32 {
        self.iteration_count
    }

    pub fn has_code(&self) -> bool {
        !self.current_code.is_empty()
    }

    /// Replace the current code with a fresh extraction
    pub fn set_code(&mut self, code: String) {
        self.current_code = code;
    }

    /// Adopt refined code and advance the iteration counter, returning the new count
    pub fn record_refinement(&mut self, code: String) -> u32 {
        self.current_code = code;
        self.iteration_count += 1;
        self.iteration_count
    }

    /// Final code of the run, if anything was ever extracted
    pub fn into_final_code(self) -> Option<String> {
        if self.current_code.is_empty() { None } else { Some(self.current_code) }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AutoplayState {
    Stopped, // Not scheduled, ticks are ignored
    Running, // Accumulating frame time towards the next advance
}

use super::TimerHandle;

#[derive(Debug, Clone)]
pub enum GameEngineCommand {
    SquareClick(usize), // square index, row-major
    ShowHint,
    TimerFired(TimerHandle),
    Restart,
}

/// Decides when the scoreboard needs a redraw.
///
/// The scoreboard only changes on input, so a frame is drawn when the
/// snapshot fingerprint changes, and otherwise at most once per
/// `min_interval_ms` to repair any terminal damage.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_interval_ms: u64,
    /// `(time, fingerprint)` of the last drawn frame.
    last: Option<(u64, u64)>,
}

impl RenderThrottle {
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            min_interval_ms,
            last: None,
        }
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let due = match self.last {
            None => true,
            Some((at, fp)) => {
                fp != fingerprint || now_ms.saturating_sub(at) >= self.min_interval_ms
            }
        };
        if due {
            self.last = Some((now_ms, fingerprint));
        }
        due
    }

    /// Make the next call render regardless of fingerprint (terminal resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}

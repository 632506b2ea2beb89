use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FadeDirection {
    In,
    Out,
}

impl FadeDirection {
    pub(crate) fn target_opacity(self) -> f32 {
        match self {
            FadeDirection::In => 1.0,
            FadeDirection::Out => 0.0,
        }
    }
}

/// A fade that has been handed to the timer. Completion comes back carrying `token`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FadeTicket {
    pub(crate) token: u64,
    pub(crate) direction: FadeDirection,
    pub(crate) duration: Duration,
}

/// Tracks the single loading-overlay animation.
///
/// Starting a fade retargets whatever is running: the older fade's completion still
/// arrives but no longer matches the current token and is dropped.
#[derive(Debug, Default)]
pub(crate) struct OverlayFade {
    next_token: u64,
    in_flight: Option<FadeTicket>,
    target_opacity: f32,
    duration_ms: u32,
}

impl OverlayFade {
    pub(crate) fn begin(&mut self, direction: FadeDirection, duration_ms: u32) -> FadeTicket {
        self.next_token += 1;
        let ticket = FadeTicket {
            token: self.next_token,
            direction,
            duration: Duration::from_millis(u64::from(duration_ms)),
        };
        self.in_flight = Some(ticket);
        self.target_opacity = direction.target_opacity();
        self.duration_ms = duration_ms;
        ticket
    }

    /// Settle the fade identified by `token`. Returns `None` for a retargeted fade.
    pub(crate) fn complete(&mut self, token: u64) -> Option<FadeDirection> {
        match self.in_flight {
            Some(ticket) if ticket.token == token => {
                self.in_flight = None;
                Some(ticket.direction)
            }
            _ => None,
        }
    }

    pub(crate) fn target_opacity(&self) -> f32 {
        self.target_opacity
    }

    pub(crate) fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    #[cfg(test)]
    pub(crate) fn in_flight(&self) -> Option<FadeDirection> {
        self.in_flight.map(|t| t.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_in_then_complete() {
        let mut fade = OverlayFade::default();
        assert_eq!(fade.target_opacity(), 0.0);

        let ticket = fade.begin(FadeDirection::In, 50);
        assert_eq!(ticket.duration, Duration::from_millis(50));
        assert_eq!(fade.target_opacity(), 1.0);
        assert_eq!(fade.in_flight(), Some(FadeDirection::In));

        assert_eq!(fade.complete(ticket.token), Some(FadeDirection::In));
        assert_eq!(fade.in_flight(), None);
        // A second completion for the same token is ignored.
        assert_eq!(fade.complete(ticket.token), None);
    }

    #[test]
    fn retargeted_fade_drops_older_completion() {
        let mut fade = OverlayFade::default();
        let fade_in = fade.begin(FadeDirection::In, 50);
        let fade_out = fade.begin(FadeDirection::Out, 10);
        assert_ne!(fade_in.token, fade_out.token);
        assert_eq!(fade.target_opacity(), 0.0);
        assert_eq!(fade.duration_ms(), 10);

        assert_eq!(fade.complete(fade_in.token), None);
        assert_eq!(fade.in_flight(), Some(FadeDirection::Out));
        assert_eq!(fade.complete(fade_out.token), Some(FadeDirection::Out));
    }
}

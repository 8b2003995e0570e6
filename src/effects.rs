//! Short-lived decorative effects: the loading overlay and button ripples.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingPhase {
    Visible,
    Fading,
    Removed,
}

/// Overlay shown on load, faded out after a hold and then dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadingScreen {
    phase: LoadingPhase,
    remaining: Duration,
    fade: Duration,
}

impl LoadingScreen {
    pub fn new(hold: Duration, fade: Duration) -> Self {
        Self {
            phase: LoadingPhase::Visible,
            remaining: hold,
            fade,
        }
    }

    pub fn advance(&mut self, mut elapsed: Duration) {
        while self.phase != LoadingPhase::Removed && elapsed >= self.remaining {
            elapsed -= self.remaining;
            (self.phase, self.remaining) = match self.phase {
                LoadingPhase::Visible => (LoadingPhase::Fading, self.fade),
                _ => (LoadingPhase::Removed, Duration::ZERO),
            };
        }
        self.remaining = self.remaining.saturating_sub(elapsed);
    }

    pub fn phase(&self) -> LoadingPhase {
        self.phase
    }
}

/// Click feedback circle inside a button, in button-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub id: u32,
    pub size: f64,
    pub x: f64,
    pub y: f64,
    remaining: Duration,
}

/// Button rectangle and pointer position in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickGeometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub client_x: f64,
    pub client_y: f64,
}

impl Ripple {
    pub fn from_click(id: u32, click: ClickGeometry, lifetime: Duration) -> Self {
        let size = click.width.max(click.height);
        Self {
            id,
            size,
            x: click.client_x - click.left - size / 2.0,
            y: click.client_y - click.top - size / 2.0,
            remaining: lifetime,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {size:.2}px; height: {size:.2}px; left: {:.2}px; top: {:.2}px;",
            self.x,
            self.y,
            size = self.size
        )
    }
}

/// Live ripples keyed by the button that spawned them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ripples {
    next_id: u32,
    live: Vec<(String, Ripple)>,
}

impl Ripples {
    pub fn spawn(&mut self, button: &str, click: ClickGeometry, lifetime: Duration) {
        let ripple = Ripple::from_click(self.next_id, click, lifetime);
        self.next_id = self.next_id.wrapping_add(1);
        self.live.push((button.to_string(), ripple));
    }

    pub fn advance(&mut self, elapsed: Duration) {
        self.live.retain_mut(|(_, ripple)| {
            ripple.remaining = ripple.remaining.saturating_sub(elapsed);
            !ripple.remaining.is_zero()
        });
    }

    pub fn for_button<'a>(&'a self, button: &'a str) -> impl Iterator<Item = &'a Ripple> + 'a {
        self.live
            .iter()
            .filter(move |(owner, _)| owner == button)
            .map(|(_, ripple)| ripple)
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn loading_screen_fades_then_disappears() {
        let mut screen = LoadingScreen::new(ms(1_500), ms(500));
        screen.advance(ms(1_499));
        assert_eq!(screen.phase(), LoadingPhase::Visible);
        screen.advance(ms(1));
        assert_eq!(screen.phase(), LoadingPhase::Fading);
        screen.advance(ms(500));
        assert_eq!(screen.phase(), LoadingPhase::Removed);
    }

    #[test]
    fn loading_screen_survives_one_huge_frame() {
        let mut screen = LoadingScreen::new(ms(1_500), ms(500));
        screen.advance(ms(60_000));
        assert_eq!(screen.phase(), LoadingPhase::Removed);
    }

    #[test]
    fn ripple_is_centered_on_pointer() {
        let click = ClickGeometry {
            left: 100.0,
            top: 50.0,
            width: 120.0,
            height: 40.0,
            client_x: 130.0,
            client_y: 70.0,
        };
        let ripple = Ripple::from_click(0, click, ms(600));

        assert_eq!(ripple.size, 120.0);
        assert_eq!(ripple.x, -30.0);
        assert_eq!(ripple.y, -40.0);
    }

    #[test]
    fn ripples_expire_after_lifetime() {
        let click = ClickGeometry {
            left: 0.0,
            top: 0.0,
            width: 10.0,
            height: 10.0,
            client_x: 5.0,
            client_y: 5.0,
        };
        let mut ripples = Ripples::default();
        ripples.spawn("hire", click, ms(600));
        ripples.spawn("resume", click, ms(600));

        assert_eq!(ripples.for_button("hire").count(), 1);
        ripples.advance(ms(599));
        assert!(!ripples.is_empty());
        ripples.advance(ms(1));
        assert!(ripples.is_empty());
    }
}

//! Header, section links and scroll affordances.

use std::time::Duration;

use crate::config::SiteConfig;

/// Holds only the latest value and releases it after `wait` passes with no
/// newer value arriving.
#[derive(Clone, Debug, PartialEq)]
pub struct Debouncer<T> {
    wait: Duration,
    pending: Option<(T, Duration)>,
}

impl<T> Debouncer<T> {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    /// Supersedes whatever was pending and restarts the quiet period.
    pub fn push(&mut self, value: T) {
        self.pending = Some((value, self.wait));
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn advance(&mut self, elapsed: Duration) -> Option<T> {
        let (_, remaining) = self.pending.as_mut()?;
        *remaining = remaining.saturating_sub(elapsed);

        if remaining.is_zero() {
            self.pending.take().map(|(value, _)| value)
        } else {
            None
        }
    }
}

/// Vertical extent of a page section, in document pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageLayout {
    pub header_height: f64,
    pub sections: Vec<SectionSpan>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollSnapshot {
    pub offset: f64,
    pub layout: PageLayout,
}

/// Section containing `offset`, shifted up by the header and a lookahead.
/// Later sections win when spans overlap.
pub fn active_section(offset: f64, layout: &PageLayout, lookahead: f64) -> Option<&str> {
    layout
        .sections
        .iter()
        .filter(|section| {
            let top = section.top - layout.header_height - lookahead;
            offset >= top && offset < top + section.height
        })
        .last()
        .map(|section| section.id.as_str())
}

/// Scroll offset that puts a section's top just below the fixed header.
pub fn scroll_target(section_top: f64, header_height: f64) -> f64 {
    section_top - header_height
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub header_compact: bool,
    pub scroll_top_visible: bool,
    pub active_section: Option<String>,
}

impl NavState {
    pub fn is_active(&self, section_id: &str) -> bool {
        self.active_section.as_deref() == Some(section_id)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollCoordinator {
    debounce: Debouncer<ScrollSnapshot>,
    header_compact_offset: f64,
    scroll_top_offset: f64,
    section_lookahead: f64,
    state: NavState,
}

impl ScrollCoordinator {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            debounce: Debouncer::new(config.scroll_debounce),
            header_compact_offset: config.header_compact_offset,
            scroll_top_offset: config.scroll_top_offset,
            section_lookahead: config.section_lookahead,
            state: NavState::default(),
        }
    }

    pub fn on_scroll(&mut self, snapshot: ScrollSnapshot) {
        self.debounce.push(snapshot);
    }

    /// Applies the last scroll once the debounce window has been quiet.
    /// Returns whether anything visible changed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let Some(snapshot) = self.debounce.advance(elapsed) else {
            return false;
        };

        let next = NavState {
            header_compact: snapshot.offset > self.header_compact_offset,
            scroll_top_visible: snapshot.offset > self.scroll_top_offset,
            active_section: active_section(snapshot.offset, &snapshot.layout, self.section_lookahead)
                .map(ToString::to_string),
        };
        let changed = next != self.state;
        self.state = next;
        changed
    }

    /// Marks a link active right away, as on a navigation click.
    pub fn activate(&mut self, section_id: &str) {
        self.state.active_section = Some(section_id.to_string());
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Returns whether the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

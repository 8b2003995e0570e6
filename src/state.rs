//! Application state.
//!
//! Every component owns one field of [`AppState`] and only [`AppState::reduce`]
//! mutates it. Time enters through [`Action::Tick`], dispatched by a single
//! page-wide interval, so the whole page can be replayed under a virtual
//! clock.

use std::rc::Rc;
use std::time::Duration;

use serde_json::json;

use crate::config::SiteConfig;
use crate::content::{STATS, SKILLS};
use crate::counter::CounterAnimation;
use crate::effects::{ClickGeometry, LoadingScreen, Ripples};
use crate::form::{ContactForm, Field, SENT_MESSAGE};
use crate::logging::{log_event, LogLevel};
use crate::modal::ProjectModal;
use crate::nav::{MobileMenu, NavState, ScrollCoordinator, ScrollSnapshot};
use crate::projects::{ProjectFilter, ProjectGallery, PROJECTS};
use crate::reveal::RevealKey;
use crate::skill_bar::SkillBar;
use crate::theme::Theme;
use crate::toast::{Toast, ToastKind};
use crate::typing::{RoleSequence, TypingAnimator};

pub const RESUME_STARTED_MESSAGE: &str = "Resume download started!";

/// Turns readings of a monotonic millisecond clock into [`Action::Tick`]
/// lengths.
///
/// The page takes a lap both on its interval and right before any other
/// action, so timers such as the scroll debounce only ever see time that
/// passed after the action that started them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameClock {
    last_ms: f64,
}

impl FrameClock {
    pub fn new(now_ms: f64) -> Self {
        Self { last_ms: now_ms }
    }

    /// Time since the previous lap. A reading behind the last one counts as
    /// no time.
    pub fn lap(&mut self, now_ms: f64) -> Duration {
        let elapsed_ms = now_ms - self.last_ms;
        if elapsed_ms.is_nan() || elapsed_ms <= 0.0 {
            return Duration::ZERO;
        }
        self.last_ms = now_ms;
        Duration::from_secs_f64(elapsed_ms / 1_000.0)
    }
}

/// Uncaught problems reported by the page runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fault {
    Error(String),
    Rejection(String),
}

impl Fault {
    pub fn toast_message(&self) -> &'static str {
        match self {
            Self::Error(_) => "An unexpected error occurred.",
            Self::Rejection(_) => "An operation failed unexpectedly.",
        }
    }

    fn event(&self) -> (&'static str, &str) {
        match self {
            Self::Error(detail) => ("uncaught_error", detail),
            Self::Rejection(detail) => ("unhandled_rejection", detail),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Tick(Duration),
    ToggleTheme,
    ToggleMenu,
    Scrolled(ScrollSnapshot),
    /// A navigation link was clicked; the view performs the scroll.
    Navigate(String),
    Revealed(RevealKey),
    SetFilter(ProjectFilter),
    OpenProject(String),
    CloseModal,
    Escape,
    FieldInput(Field, String),
    FieldFocus(Field),
    FieldBlur(Field),
    Submit,
    Ripple { button: String, click: ClickGeometry },
    ResumeDownloadStarted,
    Fault(Fault),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterSlot {
    pub label: &'static str,
    raw_target: &'static str,
    animation: Option<CounterAnimation>,
}

impl CounterSlot {
    pub fn text(&self) -> String {
        self.animation
            .as_ref()
            .map(CounterAnimation::text)
            .unwrap_or_else(|| "0".to_string())
    }

    pub fn raw_target(&self) -> &'static str {
        self.raw_target
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    config: Rc<SiteConfig>,
    pub theme: Theme,
    pub loading: LoadingScreen,
    pub typing: Option<TypingAnimator>,
    pub nav: ScrollCoordinator,
    pub menu: MobileMenu,
    pub counters: Vec<CounterSlot>,
    pub skills: Vec<SkillBar>,
    pub images_loaded: Vec<bool>,
    pub gallery: ProjectGallery,
    pub modal: ProjectModal,
    pub form: ContactForm,
    pub toast: Toast,
    pub ripples: Ripples,
}

impl AppState {
    pub fn new(config: SiteConfig, theme: Theme) -> Self {
        let typing = match RoleSequence::new(config.roles.iter().cloned()) {
            Ok(roles) => Some(TypingAnimator::new(roles, config.typing)),
            Err(error) => {
                log_event(
                    config.log_level,
                    LogLevel::Error,
                    "typing_disabled",
                    json!({ "error": error.to_string() }),
                );
                None
            }
        };

        Self {
            theme,
            loading: LoadingScreen::new(config.loading_screen, config.loading_fade),
            typing,
            nav: ScrollCoordinator::new(&config),
            menu: MobileMenu::default(),
            counters: STATS
                .iter()
                .map(|&(label, raw_target)| CounterSlot {
                    label,
                    raw_target,
                    animation: None,
                })
                .collect(),
            skills: SKILLS
                .iter()
                .map(|&(name, width)| SkillBar::new(name, width))
                .collect(),
            images_loaded: vec![false; PROJECTS.len()],
            gallery: ProjectGallery::new(config.card_appear_delay, config.card_hide_delay),
            modal: ProjectModal::default(),
            form: ContactForm::default(),
            toast: Toast::new(config.toast_duration),
            ripples: Ripples::default(),
            config: Rc::new(config),
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn nav_state(&self) -> &NavState {
        self.nav.state()
    }

    pub fn typed_text(&self) -> &str {
        self.typing.as_ref().map(TypingAnimator::text).unwrap_or_default()
    }

    /// The page behind an open menu or modal must not scroll.
    pub fn scroll_locked(&self) -> bool {
        self.menu.is_open() || self.modal.is_open()
    }

    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::Tick(elapsed) => self.advance(elapsed),
            Action::ToggleTheme => self.theme = self.theme.toggled(),
            Action::ToggleMenu => self.menu.toggle(),
            Action::Scrolled(snapshot) => self.nav.on_scroll(snapshot),
            Action::Navigate(section_id) => {
                self.nav.activate(&section_id);
                self.menu.close();
            }
            Action::Revealed(key) => self.reveal(key),
            Action::SetFilter(filter) => self.gallery.apply_filter(filter),
            Action::OpenProject(project_id) => {
                if !self.modal.open(&project_id) {
                    self.log(LogLevel::Debug, "unknown_project", json!({ "id": project_id }));
                }
            }
            Action::CloseModal => {
                self.modal.close();
            }
            Action::Escape => {
                self.modal.close();
                self.menu.close();
            }
            Action::FieldInput(field, value) => self.form.set(field, value),
            Action::FieldFocus(field) => self.form.focus(field),
            Action::FieldBlur(field) => self.form.blur(field),
            Action::Submit => self.submit(),
            Action::Ripple { button, click } => {
                self.ripples.spawn(&button, click, self.config.ripple_lifetime)
            }
            Action::ResumeDownloadStarted => {
                self.show_toast(RESUME_STARTED_MESSAGE, ToastKind::Success)
            }
            Action::Fault(fault) => {
                let (event, detail) = fault.event();
                self.log(LogLevel::Error, event, json!({ "detail": detail }));
                self.show_toast(fault.toast_message(), ToastKind::Error);
            }
        }
    }

    fn advance(&mut self, elapsed: Duration) {
        self.loading.advance(elapsed);
        if let Some(typing) = self.typing.as_mut() {
            typing.advance(elapsed);
        }
        self.nav.advance(elapsed);
        for slot in &mut self.counters {
            if let Some(animation) = slot.animation.as_mut() {
                animation.advance(elapsed);
            }
        }
        self.toast.advance(elapsed);
        if self.form.advance(elapsed) {
            self.log(LogLevel::Info, "contact_form_sent", json!({}));
            self.show_toast(SENT_MESSAGE, ToastKind::Success);
        }
        self.gallery.advance(elapsed);
        self.ripples.advance(elapsed);
    }

    fn reveal(&mut self, key: RevealKey) {
        match key {
            RevealKey::Counter(index) => {
                let duration = self.config.counter_duration;
                let interval = self.config.counter_interval;
                let Some(slot) = self.counters.get_mut(index) else {
                    return;
                };
                if slot.animation.is_some() {
                    return;
                }

                match CounterAnimation::parse_target(slot.raw_target) {
                    Some(target) => {
                        slot.animation = Some(CounterAnimation::new(target, duration, interval))
                    }
                    None => {
                        let raw = slot.raw_target;
                        self.log(LogLevel::Warn, "counter_target_invalid", json!({ "raw": raw }));
                    }
                }
            }
            RevealKey::SkillBar(index) => {
                if let Some(bar) = self.skills.get_mut(index) {
                    bar.animate();
                }
            }
            RevealKey::LazyImage(index) => {
                if let Some(loaded) = self.images_loaded.get_mut(index) {
                    *loaded = true;
                }
            }
        }
    }

    fn submit(&mut self) {
        match self.form.submit(self.config.submit_delay) {
            Ok(()) => self.log(LogLevel::Debug, "contact_form_sending", json!({})),
            Err(error) => {
                self.log(
                    LogLevel::Info,
                    "contact_form_invalid",
                    json!({ "reason": format!("{error:?}") }),
                );
                self.show_toast(error.to_string(), ToastKind::Error);
            }
        }
    }

    fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind) {
        let message = message.into();
        self.log(
            LogLevel::Debug,
            "toast_shown",
            json!({ "kind": kind, "message": message }),
        );
        self.toast.show(message, kind);
    }

    fn log(&self, level: LogLevel, event: &str, fields: serde_json::Value) {
        log_event(self.config.log_level, level, event, fields);
    }
}

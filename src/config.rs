use std::time::Duration;

use crate::logging::LogLevel;

pub const DEFAULT_ROLES: &[&str] = &[
    "Web Developer",
    "Frontend Developer",
    "Full Stack Developer",
    "React Developer",
    "UI/UX Enthusiast",
];

const DEFAULT_TYPING_STEP_MS: u64 = 100;
const DEFAULT_TYPED_PAUSE_MS: u64 = 2_000;
const DEFAULT_ERASING_STEP_MS: u64 = 50;
const DEFAULT_NEXT_ROLE_PAUSE_MS: u64 = 500;
const DEFAULT_COUNTER_DURATION_MS: u64 = 2_000;
const DEFAULT_COUNTER_INTERVAL_MS: u64 = 16;
const DEFAULT_REVEAL_THRESHOLD_PERCENT: u64 = 50;
const DEFAULT_REVEAL_BOTTOM_MARGIN_PX: u64 = 100;
const DEFAULT_SCROLL_DEBOUNCE_MS: u64 = 10;
const DEFAULT_HEADER_COMPACT_OFFSET_PX: u64 = 100;
const DEFAULT_SCROLL_TOP_OFFSET_PX: u64 = 300;
const DEFAULT_SECTION_LOOKAHEAD_PX: u64 = 50;
const DEFAULT_TOAST_DURATION_MS: u64 = 3_000;
const DEFAULT_SUBMIT_DELAY_MS: u64 = 2_000;
const DEFAULT_LOADING_SCREEN_MS: u64 = 1_500;
const DEFAULT_LOADING_FADE_MS: u64 = 500;
const DEFAULT_CARD_APPEAR_DELAY_MS: u64 = 100;
const DEFAULT_CARD_HIDE_DELAY_MS: u64 = 300;
const DEFAULT_RIPPLE_LIFETIME_MS: u64 = 600;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const STEP_MS_BOUNDS: (u64, u64) = (1, 10_000);
const PAUSE_MS_BOUNDS: (u64, u64) = (0, 60_000);
const COUNTER_DURATION_MS_BOUNDS: (u64, u64) = (16, 60_000);
const COUNTER_INTERVAL_MS_BOUNDS: (u64, u64) = (1, 1_000);
const REVEAL_THRESHOLD_PERCENT_BOUNDS: (u64, u64) = (0, 100);
const PIXEL_BOUNDS: (u64, u64) = (0, 10_000);
const SCROLL_DEBOUNCE_MS_BOUNDS: (u64, u64) = (0, 1_000);
const ROLE_SEPARATOR: char = '|';

/// Timings for the headline typing loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingTimings {
    pub typing_step: Duration,
    pub typed_pause: Duration,
    pub erasing_step: Duration,
    pub next_role_pause: Duration,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            typing_step: Duration::from_millis(DEFAULT_TYPING_STEP_MS),
            typed_pause: Duration::from_millis(DEFAULT_TYPED_PAUSE_MS),
            erasing_step: Duration::from_millis(DEFAULT_ERASING_STEP_MS),
            next_role_pause: Duration::from_millis(DEFAULT_NEXT_ROLE_PAUSE_MS),
        }
    }
}

/// Every tunable of the page. Values come from `data-*` attributes on the
/// mount element and fall back to the defaults when absent or out of bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub roles: Vec<String>,
    pub typing: TypingTimings,
    pub counter_duration: Duration,
    pub counter_interval: Duration,
    pub reveal_threshold: f64,
    pub reveal_bottom_margin_px: u64,
    pub scroll_debounce: Duration,
    pub header_compact_offset: f64,
    pub scroll_top_offset: f64,
    pub section_lookahead: f64,
    pub toast_duration: Duration,
    pub submit_delay: Duration,
    pub loading_screen: Duration,
    pub loading_fade: Duration,
    pub card_appear_delay: Duration,
    pub card_hide_delay: Duration,
    pub ripple_lifetime: Duration,
    pub log_level: LogLevel,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl SiteConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let ms = |name: &str, default: u64, bounds: (u64, u64)| {
            Duration::from_millis(parse_u64_with_bounds(&lookup, name, default, bounds))
        };
        let px = |name: &str, default: u64| {
            parse_u64_with_bounds(&lookup, name, default, PIXEL_BOUNDS) as f64
        };

        let typing = TypingTimings {
            typing_step: ms("typing-step-ms", DEFAULT_TYPING_STEP_MS, STEP_MS_BOUNDS),
            typed_pause: ms("typed-pause-ms", DEFAULT_TYPED_PAUSE_MS, PAUSE_MS_BOUNDS),
            erasing_step: ms("erasing-step-ms", DEFAULT_ERASING_STEP_MS, STEP_MS_BOUNDS),
            next_role_pause: ms("next-role-pause-ms", DEFAULT_NEXT_ROLE_PAUSE_MS, PAUSE_MS_BOUNDS),
        };
        let reveal_threshold = parse_u64_with_bounds(
            &lookup,
            "reveal-threshold-percent",
            DEFAULT_REVEAL_THRESHOLD_PERCENT,
            REVEAL_THRESHOLD_PERCENT_BOUNDS,
        ) as f64
            / 100.0;

        Self {
            roles: parse_roles(&lookup, "roles"),
            typing,
            counter_duration: ms(
                "counter-duration-ms",
                DEFAULT_COUNTER_DURATION_MS,
                COUNTER_DURATION_MS_BOUNDS,
            ),
            counter_interval: ms(
                "counter-interval-ms",
                DEFAULT_COUNTER_INTERVAL_MS,
                COUNTER_INTERVAL_MS_BOUNDS,
            ),
            reveal_threshold,
            reveal_bottom_margin_px: parse_u64_with_bounds(
                &lookup,
                "reveal-bottom-margin-px",
                DEFAULT_REVEAL_BOTTOM_MARGIN_PX,
                PIXEL_BOUNDS,
            ),
            scroll_debounce: ms(
                "scroll-debounce-ms",
                DEFAULT_SCROLL_DEBOUNCE_MS,
                SCROLL_DEBOUNCE_MS_BOUNDS,
            ),
            header_compact_offset: px("header-compact-px", DEFAULT_HEADER_COMPACT_OFFSET_PX),
            scroll_top_offset: px("scroll-top-px", DEFAULT_SCROLL_TOP_OFFSET_PX),
            section_lookahead: px("section-lookahead-px", DEFAULT_SECTION_LOOKAHEAD_PX),
            toast_duration: ms("toast-duration-ms", DEFAULT_TOAST_DURATION_MS, STEP_MS_BOUNDS),
            submit_delay: ms("submit-delay-ms", DEFAULT_SUBMIT_DELAY_MS, PAUSE_MS_BOUNDS),
            loading_screen: ms("loading-screen-ms", DEFAULT_LOADING_SCREEN_MS, PAUSE_MS_BOUNDS),
            loading_fade: ms("loading-fade-ms", DEFAULT_LOADING_FADE_MS, PAUSE_MS_BOUNDS),
            card_appear_delay: ms(
                "card-appear-delay-ms",
                DEFAULT_CARD_APPEAR_DELAY_MS,
                PAUSE_MS_BOUNDS,
            ),
            card_hide_delay: ms("card-hide-delay-ms", DEFAULT_CARD_HIDE_DELAY_MS, PAUSE_MS_BOUNDS),
            ripple_lifetime: ms("ripple-lifetime-ms", DEFAULT_RIPPLE_LIFETIME_MS, PAUSE_MS_BOUNDS),
            log_level: parse_log_level(&lookup, "log-level", DEFAULT_LOG_LEVEL),
        }
    }

    /// Root margin string for visibility observers: shrinks the viewport
    /// from the bottom so elements must clear the fold before counting.
    pub fn reveal_root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.reveal_bottom_margin_px)
    }
}

fn parse_non_empty_string(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_u64_with_bounds(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: u64,
    bounds: (u64, u64),
) -> u64 {
    parse_non_empty_string(lookup, name)
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_log_level(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: LogLevel,
) -> LogLevel {
    parse_non_empty_string(lookup, name)
        .and_then(|value| LogLevel::from_str(&value.to_ascii_lowercase()))
        .unwrap_or(default)
}

// An explicit override is taken as-is, even when every entry is blank, so
// that a broken attribute surfaces as a configuration error downstream.
fn parse_roles(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Vec<String> {
    match lookup(name) {
        Some(raw) => raw
            .split(ROLE_SEPARATOR)
            .map(str::trim)
            .filter(|role| !role.is_empty())
            .map(ToString::to_string)
            .collect(),
        None => DEFAULT_ROLES.iter().map(ToString::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(pairs: &[(&str, &str)]) -> SiteConfig {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        SiteConfig::from_lookup(|name| values.get(name).cloned())
    }

    #[test]
    fn defaults_match_page_timings() {
        let config = SiteConfig::default();

        assert_eq!(config.roles.len(), DEFAULT_ROLES.len());
        assert_eq!(config.typing.typing_step, Duration::from_millis(100));
        assert_eq!(config.typing.typed_pause, Duration::from_millis(2_000));
        assert_eq!(config.typing.erasing_step, Duration::from_millis(50));
        assert_eq!(config.typing.next_role_pause, Duration::from_millis(500));
        assert_eq!(config.counter_interval, Duration::from_millis(16));
        assert_eq!(config.reveal_threshold, 0.5);
        assert_eq!(config.reveal_root_margin(), "0px 0px -100px 0px");
        assert_eq!(config.toast_duration, Duration::from_millis(3_000));
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn out_of_bounds_override_falls_back_to_default() {
        let config = config_with(&[("typing-step-ms", "0"), ("counter-interval-ms", "nope")]);

        assert_eq!(config.typing.typing_step, Duration::from_millis(100));
        assert_eq!(config.counter_interval, Duration::from_millis(16));
    }

    #[test]
    fn valid_overrides_are_applied() {
        let config = config_with(&[
            ("erasing-step-ms", " 25 "),
            ("scroll-top-px", "500"),
            ("log-level", "DEBUG"),
            ("reveal-threshold-percent", "75"),
        ]);

        assert_eq!(config.typing.erasing_step, Duration::from_millis(25));
        assert_eq!(config.scroll_top_offset, 500.0);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.reveal_threshold, 0.75);
    }

    #[test]
    fn roles_override_is_split_and_trimmed() {
        let config = config_with(&[("roles", "Rustacean | Writer||")]);
        assert_eq!(config.roles, vec!["Rustacean".to_string(), "Writer".to_string()]);
    }

    #[test]
    fn blank_roles_override_yields_empty_list() {
        let config = config_with(&[("roles", " | ")]);
        assert!(config.roles.is_empty());
    }
}

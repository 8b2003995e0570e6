/// A proficiency bar whose width jumps to its target once revealed. The
/// visual easing is left to the stylesheet transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillBar {
    pub name: &'static str,
    target_width: String,
    width: Option<String>,
}

impl SkillBar {
    pub fn new(name: &'static str, target_width: impl Into<String>) -> Self {
        Self {
            name,
            target_width: target_width.into(),
            width: None,
        }
    }

    /// Writes the target width once; later calls change nothing.
    pub fn animate(&mut self) {
        if self.width.is_none() {
            self.width = Some(self.target_width.clone());
        }
    }

    pub fn target_width(&self) -> &str {
        &self.target_width
    }

    /// Inline style for the bar: zero until revealed.
    pub fn style(&self) -> String {
        format!("width: {};", self.width.as_deref().unwrap_or("0"))
    }

    #[cfg(test)]
    pub fn is_revealed(&self) -> bool {
        self.width.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_is_zero_until_animated() {
        let bar = SkillBar::new("Rust", "85%");
        assert_eq!(bar.style(), "width: 0;");
        assert!(!bar.is_revealed());
    }

    #[test]
    fn animate_writes_target_string_verbatim() {
        let mut bar = SkillBar::new("CSS", "92.5%");
        bar.animate();
        assert_eq!(bar.style(), "width: 92.5%;");

        bar.animate();
        assert_eq!(bar.style(), "width: 92.5%;");
    }
}

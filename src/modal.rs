use crate::projects::{find_project, ProjectRecord};

/// The project details dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProjectModal {
    project: Option<&'static ProjectRecord>,
}

impl ProjectModal {
    /// Opens on the given project. Unknown ids leave the modal untouched.
    pub fn open(&mut self, project_id: &str) -> bool {
        match find_project(project_id) {
            Some(project) => {
                self.project = Some(project);
                true
            }
            None => false,
        }
    }

    /// Returns whether it was open.
    pub fn close(&mut self) -> bool {
        self.project.take().is_some()
    }

    pub fn is_open(&self) -> bool {
        self.project.is_some()
    }

    pub fn project(&self) -> Option<&'static ProjectRecord> {
        self.project
    }
}

/// Where focus must jump to keep Tab inside the dialog, if anywhere.
///
/// `current` is the index of the focused element among `count` focusable
/// ones. Tab past the last wraps to the first and Shift+Tab before the first
/// wraps to the last; every other move is left to the browser.
pub fn trap_focus(current: Option<usize>, count: usize, backwards: bool) -> Option<usize> {
    let last = count.checked_sub(1)?;

    match (current, backwards) {
        (Some(0), true) => Some(last),
        (Some(index), false) if index == last => Some(0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_known_project_and_ignores_unknown() {
        let mut modal = ProjectModal::default();

        assert!(!modal.open("missing"));
        assert!(!modal.is_open());

        assert!(modal.open("lms"));
        assert_eq!(modal.project().map(|p| p.title), Some("Learning Management System"));

        assert!(!modal.open("missing"));
        assert_eq!(modal.project().map(|p| p.id), Some("lms"));
    }

    #[test]
    fn close_reports_previous_state() {
        let mut modal = ProjectModal::default();
        assert!(!modal.close());
        modal.open("finance");
        assert!(modal.close());
        assert!(!modal.is_open());
    }

    #[test]
    fn tab_wraps_at_both_ends() {
        assert_eq!(trap_focus(Some(3), 4, false), Some(0));
        assert_eq!(trap_focus(Some(0), 4, true), Some(3));
        assert_eq!(trap_focus(Some(1), 4, false), None);
        assert_eq!(trap_focus(Some(2), 4, true), None);
    }

    #[test]
    fn nothing_to_trap_without_focusables() {
        assert_eq!(trap_focus(None, 0, false), None);
        assert_eq!(trap_focus(None, 3, false), None);
    }
}

//! Active-profile tracking shared by all three screens.
//!
//! A screen is either waiting for a profile to be picked or showing one.
//! Selection never fails: an id that matches nothing simply lands the screen
//! back in the placeholder branch.

use crate::ChildProfile;

/// Find a profile by id with a linear scan
pub fn find_profile<'a>(profiles: &'a [ChildProfile], id: &str) -> Option<&'a ChildProfile> {
    profiles.iter().find(|profile| profile.id == id)
}

/// Id of the selected profile, only if that profile is actually in the list
pub fn active_profile_id<'a>(profiles: &'a [ChildProfile], selected_id: Option<&str>) -> Option<&'a str> {
    selected_id
        .and_then(|id| find_profile(profiles, id))
        .map(|profile| profile.id.as_str())
}

/// Whether the list item for `profile_id` should be highlighted
pub fn is_profile_active(profiles: &[ChildProfile], selected_id: Option<&str>, profile_id: &str) -> bool {
    active_profile_id(profiles, selected_id) == Some(profile_id)
}

/// What a screen should render for the current selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionView<'a> {
    NoProfileSelected,
    ProfileSelected(&'a ChildProfile),
}

/// Ordered profile list plus the id of the active one
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSelection {
    profiles: Vec<ChildProfile>,
    active_id: Option<String>,
}

impl ProfileSelection {
    /// Start with the first profile active
    pub fn first_active(profiles: Vec<ChildProfile>) -> Self {
        let active_id = profiles.first().map(|profile| profile.id.clone());
        Self { profiles, active_id }
    }

    /// Start with nothing selected
    pub fn unselected(profiles: Vec<ChildProfile>) -> Self {
        Self { profiles, active_id: None }
    }

    pub fn profiles(&self) -> &[ChildProfile] {
        &self.profiles
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn select(&mut self, profile_id: String) {
        if find_profile(&self.profiles, &profile_id).is_none() {
            log::debug!("Profile '{}' is not in the list, showing placeholder", profile_id);
        } else {
            log::debug!("Active profile set to '{}'", profile_id);
        }
        self.active_id = Some(profile_id);
    }

    pub fn current(&self) -> Option<&ChildProfile> {
        self.active_id
            .as_deref()
            .and_then(|id| find_profile(&self.profiles, id))
    }

    pub fn view(&self) -> SelectionView<'_> {
        match self.current() {
            Some(profile) => SelectionView::ProfileSelected(profile),
            None => SelectionView::NoProfileSelected,
        }
    }

    pub fn is_active(&self, profile_id: &str) -> bool {
        is_profile_active(&self.profiles, self.active_id(), profile_id)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::Skill;

    pub(crate) fn profile(id: &str, name: &str, skills: Vec<Skill>) -> ChildProfile {
        ChildProfile {
            id: id.to_string(),
            name: name.to_string(),
            age: 8,
            avatar: None,
            last_active: "2 days ago".to_string(),
            skills,
        }
    }

    fn two_profiles() -> Vec<ChildProfile> {
        vec![profile("1", "Emma", vec![]), profile("2", "Lucas", vec![])]
    }

    #[test]
    fn test_find_profile() {
        let profiles = two_profiles();
        assert_eq!(find_profile(&profiles, "2").map(|p| p.name.as_str()), Some("Lucas"));
        assert!(find_profile(&profiles, "3").is_none());
        assert!(find_profile(&[], "1").is_none());
    }

    #[test]
    fn test_is_profile_active_highlights_only_known_selection() {
        let profiles = two_profiles();

        assert!(is_profile_active(&profiles, Some("2"), "2"));
        assert!(!is_profile_active(&profiles, Some("2"), "1"));
        assert!(!is_profile_active(&profiles, None, "1"));

        // An id that is not in the list highlights nothing, not even an item with that id elsewhere
        assert_eq!(active_profile_id(&profiles, Some("missing")), None);
        assert!(!is_profile_active(&profiles, Some("missing"), "missing"));
        assert!(!is_profile_active(&[], Some("1"), "1"));
    }

    #[test]
    fn test_first_active_starts_on_first_profile() {
        let selection = ProfileSelection::first_active(two_profiles());
        assert_eq!(selection.active_id(), Some("1"));
        assert!(selection.is_active("1"));
        assert!(!selection.is_active("2"));
    }

    #[test]
    fn test_first_active_with_no_profiles() {
        let selection = ProfileSelection::first_active(vec![]);
        assert_eq!(selection.active_id(), None);
        assert_eq!(selection.view(), SelectionView::NoProfileSelected);
    }

    #[test]
    fn test_select_switches_and_reverses() {
        let mut selection = ProfileSelection::unselected(two_profiles());
        assert_eq!(selection.view(), SelectionView::NoProfileSelected);

        selection.select("2".to_string());
        match selection.view() {
            SelectionView::ProfileSelected(profile) => assert_eq!(profile.name, "Lucas"),
            SelectionView::NoProfileSelected => panic!("expected Lucas to be selected"),
        }

        selection.select("1".to_string());
        assert_eq!(selection.current().map(|p| p.name.as_str()), Some("Emma"));
    }

    #[test]
    fn test_unknown_id_shows_placeholder() {
        let mut selection = ProfileSelection::first_active(two_profiles());
        selection.select("missing".to_string());

        assert_eq!(selection.active_id(), Some("missing"));
        assert_eq!(selection.view(), SelectionView::NoProfileSelected);
        assert!(!selection.is_active("1"));
        assert!(!selection.is_active("missing"));
    }
}

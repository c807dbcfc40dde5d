use entities::{
    calendar_event::{
        EVENT_DEADLINE, EVENT_MEETING, EVENT_PAYMENT, EVENT_PROJECT, EVENT_TASK,
    },
    tag::{MUHASEBEADMIN, MUHASEBECI},
    user::{ROLE_ADMIN, ROLE_PROJECT_MANAGER},
};

use super::{tags::has_tag, types::PolicySubject};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryRule {
    /// Visible to holders of any of these tags.
    AnyTag(&'static [&'static str]),
    /// Visible to these exact roles.
    AnyRole(&'static [&'static str]),
    /// Visible to every signed-in user.
    Everyone,
}

const ACCOUNTING_TAGS: &[&str] = &[MUHASEBECI, MUHASEBEADMIN];
const PROJECT_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_PROJECT_MANAGER];

pub fn rule_for(category: &str) -> CategoryRule {
    match category {
        EVENT_PAYMENT => CategoryRule::AnyTag(ACCOUNTING_TAGS),
        EVENT_PROJECT => CategoryRule::AnyRole(PROJECT_ROLES),
        EVENT_TASK | EVENT_DEADLINE | EVENT_MEETING => CategoryRule::Everyone,
        // Unknown categories fall through to visible.
        _ => CategoryRule::Everyone,
    }
}

/// Whether `user` may see calendar events of `category`. An absent user sees
/// nothing.
pub fn can_view<U: PolicySubject + ?Sized>(user: Option<&U>, category: &str) -> bool {
    let Some(user) = user else {
        return false;
    };
    match rule_for(category) {
        CategoryRule::AnyTag(tags) => tags.iter().any(|tag| has_tag(Some(user), tag)),
        CategoryRule::AnyRole(roles) => roles.contains(&user.role()),
        CategoryRule::Everyone => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permissions::types::TaggedUser;

    #[test]
    fn open_categories_are_visible_to_everyone() {
        let guest = TaggedUser::without_tags("guest");
        for category in ["task", "deadline", "meeting"] {
            assert!(can_view(Some(&guest), category), "{}", category);
        }
    }

    #[test]
    fn absent_user_sees_nothing() {
        for category in ["task", "project", "payment", "deadline", "meeting", "custom", ""] {
            assert!(!can_view::<TaggedUser>(None, category), "{}", category);
        }
    }

    #[test]
    fn project_requires_role() {
        assert!(can_view(Some(&TaggedUser::new("project_manager", &[])), "project"));
        assert!(can_view(Some(&TaggedUser::new("admin", &[])), "project"));
        assert!(!can_view(Some(&TaggedUser::new("member", &[])), "project"));
        assert!(!can_view(Some(&TaggedUser::new("Admin", &[])), "project"));
        // Tags do not stand in for the role.
        assert!(!can_view(
            Some(&TaggedUser::new("team_member", &["admin"])),
            "project"
        ));
    }

    #[test]
    fn payment_requires_accounting_tag() {
        assert!(can_view(Some(&TaggedUser::new("guest", &["muhasebeci"])), "payment"));
        assert!(can_view(
            Some(&TaggedUser::new("guest", &["seller", "muhasebeadmin"])),
            "payment"
        ));
        assert!(!can_view(Some(&TaggedUser::new("admin", &[])), "payment"));
        assert!(!can_view(Some(&TaggedUser::without_tags("admin")), "payment"));
    }

    // Pins the current permissive behaviour: a category nobody has written a
    // rule for is visible to every user.
    #[test]
    fn unknown_categories_are_visible() {
        let guest = TaggedUser::without_tags("guest");
        for category in ["milestone", "custom", "payroll", ""] {
            assert_eq!(rule_for(category), CategoryRule::Everyone);
            assert!(can_view(Some(&guest), category), "{}", category);
        }
    }

    #[test]
    fn category_match_is_case_sensitive() {
        let guest = TaggedUser::without_tags("guest");
        assert!(!can_view(Some(&guest), "payment"));
        assert!(can_view(Some(&guest), "Payment"));
    }
}

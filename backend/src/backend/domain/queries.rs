//! Pure filtered and sorted views over the in-memory collections.
//!
//! Everything here is a function over already-loaded records; no storage
//! access happens in this module. Filters never mutate and never reorder
//! the surviving records, so two calls with the same input agree.

use shared::DashboardSummary;

use crate::backend::domain::models::comment::Comment;
use crate::backend::domain::models::family::Family;
use crate::backend::domain::models::location::Location;
use crate::backend::domain::models::notification::Notification;

/// Free-text-plus-location filter over the family list.
#[derive(Debug, Clone, Default)]
pub struct FamilyFilter {
    /// Case-insensitive needle matched against name, code, parents and phone
    pub search: Option<String>,
    /// Exact location name; combined with `search` as AND
    pub location: Option<String>,
}

impl FamilyFilter {
    fn matches(&self, family: &Family) -> bool {
        // A blank location means "all locations", same as no filter at all
        match self.location.as_deref().map(str::trim) {
            None | Some("") => {}
            Some(location) => {
                if family.location != location {
                    return false;
                }
            }
        }
        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(needle) => {
                let needle = needle.to_lowercase();
                [
                    &family.family_name,
                    &family.family_code,
                    &family.father_name,
                    &family.mother_name,
                    &family.phone,
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
            }
        }
    }
}

/// Keep families matching the filter, in their original order.
pub fn filter_families(families: &[Family], filter: &FamilyFilter) -> Vec<Family> {
    families
        .iter()
        .filter(|family| filter.matches(family))
        .cloned()
        .collect()
}

/// Locations sorted ascending by name, case-folded so Latin names do not
/// split into an uppercase block and a lowercase block. Hebrew names carry
/// no case and keep their code-point order.
pub fn sort_locations_by_name(locations: &mut [Location]) {
    locations.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Comments owned by one family, newest first.
pub fn comments_for_family(comments: &[Comment], family_id: &str) -> Vec<Comment> {
    let mut owned: Vec<Comment> = comments
        .iter()
        .filter(|comment| comment.family_id == family_id)
        .cloned()
        .collect();
    owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    owned
}

/// All notifications, newest first.
pub fn notifications_by_recency(notifications: &[Notification]) -> Vec<Notification> {
    let mut sorted = notifications.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted
}

pub fn count_comments_for_family(comments: &[Comment], family_id: &str) -> u32 {
    comments
        .iter()
        .filter(|comment| comment.family_id == family_id)
        .count() as u32
}

pub fn count_families_at_location(families: &[Family], location_name: &str) -> u32 {
    families
        .iter()
        .filter(|family| family.location == location_name)
        .count() as u32
}

/// Headline numbers for the dashboard view.
pub fn dashboard_summary(
    families: &[Family],
    locations: &[Location],
    notifications: &[Notification],
) -> DashboardSummary {
    DashboardSummary {
        total_families: families.len(),
        total_debt: families.iter().map(|family| family.debt_amount).sum(),
        total_locations: locations.len(),
        pending_notifications: notifications
            .iter()
            .filter(|notification| !notification.is_sent)
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::notification::NotificationSource;
    use chrono::{Duration, Utc};

    fn family(name: &str, code: &str, phone: &str, location: &str, debt: f64) -> Family {
        Family {
            id: Family::generate_id(),
            family_code: code.to_string(),
            family_name: name.to_string(),
            father_name: "David".to_string(),
            mother_name: "Rachel".to_string(),
            phone: phone.to_string(),
            location: location.to_string(),
            debt_amount: debt,
            created_at: Utc::now(),
        }
    }

    fn sample_families() -> Vec<Family> {
        vec![
            family("Cohen", "F-01", "0501234567", "Room A", 500.0),
            family("Levi", "F-02", "0527654321", "Room B", 0.0),
            family("Mizrahi", "F-03", "0541112222", "Room A", 120.5),
        ]
    }

    #[test]
    fn empty_filter_returns_everything_in_order() {
        let families = sample_families();
        let result = filter_families(&families, &FamilyFilter::default());
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].family_name, "Cohen");
        assert_eq!(result[2].family_name, "Mizrahi");
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let families = sample_families();

        let by_name = filter_families(
            &families,
            &FamilyFilter {
                search: Some("cOhEn".to_string()),
                location: None,
            },
        );
        assert_eq!(by_name.len(), 1);

        let by_phone = filter_families(
            &families,
            &FamilyFilter {
                search: Some("7654".to_string()),
                location: None,
            },
        );
        assert_eq!(by_phone.len(), 1);
        assert_eq!(by_phone[0].family_name, "Levi");

        let by_code = filter_families(
            &families,
            &FamilyFilter {
                search: Some("f-03".to_string()),
                location: None,
            },
        );
        assert_eq!(by_code.len(), 1);
    }

    #[test]
    fn blank_search_matches_everything() {
        let families = sample_families();
        let result = filter_families(
            &families,
            &FamilyFilter {
                search: Some("   ".to_string()),
                location: None,
            },
        );
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn location_and_search_combine_as_and() {
        let families = sample_families();
        let result = filter_families(
            &families,
            &FamilyFilter {
                search: Some("mizrahi".to_string()),
                location: Some("Room A".to_string()),
            },
        );
        assert_eq!(result.len(), 1);

        let no_match = filter_families(
            &families,
            &FamilyFilter {
                search: Some("mizrahi".to_string()),
                location: Some("Room B".to_string()),
            },
        );
        assert!(no_match.is_empty());
    }

    #[test]
    fn blank_location_filter_matches_everything() {
        let families = sample_families();

        let empty = filter_families(
            &families,
            &FamilyFilter {
                search: None,
                location: Some(String::new()),
            },
        );
        assert_eq!(empty.len(), 3);

        let whitespace = filter_families(
            &families,
            &FamilyFilter {
                search: None,
                location: Some("  ".to_string()),
            },
        );
        assert_eq!(whitespace.len(), 3);
    }

    #[test]
    fn location_filter_is_exact() {
        let families = sample_families();
        let result = filter_families(
            &families,
            &FamilyFilter {
                search: None,
                location: Some("room a".to_string()),
            },
        );
        assert!(result.is_empty());
    }

    #[test]
    fn comments_sort_newest_first() {
        let family_id = "family::a";
        let now = Utc::now();
        let comments = vec![
            Comment {
                id: "comment::old".to_string(),
                family_id: family_id.to_string(),
                description: "old".to_string(),
                created_at: now - Duration::hours(2),
                updated_at: None,
            },
            Comment {
                id: "comment::other".to_string(),
                family_id: "family::b".to_string(),
                description: "other".to_string(),
                created_at: now,
                updated_at: None,
            },
            Comment {
                id: "comment::new".to_string(),
                family_id: family_id.to_string(),
                description: "new".to_string(),
                created_at: now,
                updated_at: None,
            },
        ];

        let owned = comments_for_family(&comments, family_id);
        assert_eq!(owned.len(), 2);
        assert_eq!(owned[0].id, "comment::new");
        assert_eq!(owned[1].id, "comment::old");
        assert_eq!(count_comments_for_family(&comments, family_id), 2);
    }

    #[test]
    fn dashboard_sums_debt_and_counts_pending() {
        let families = sample_families();
        let locations = vec![Location {
            id: "location::a".to_string(),
            name: "Room A".to_string(),
            created_at: Utc::now(),
        }];
        let notifications = vec![
            Notification {
                id: "notification::1".to_string(),
                family_id: families[0].id.clone(),
                message: "m".to_string(),
                source: NotificationSource::Direct,
                is_sent: false,
                created_at: Utc::now(),
            },
            Notification {
                id: "notification::2".to_string(),
                family_id: families[0].id.clone(),
                message: "m".to_string(),
                source: NotificationSource::Comment,
                is_sent: true,
                created_at: Utc::now(),
            },
        ];

        let summary = dashboard_summary(&families, &locations, &notifications);
        assert_eq!(summary.total_families, 3);
        assert!((summary.total_debt - 620.5).abs() < f64::EPSILON);
        assert_eq!(summary.total_locations, 1);
        assert_eq!(summary.pending_notifications, 1);
    }

    #[test]
    fn counts_families_at_a_location() {
        let families = sample_families();
        assert_eq!(count_families_at_location(&families, "Room A"), 2);
        assert_eq!(count_families_at_location(&families, "Room C"), 0);
    }

    #[test]
    fn locations_sort_by_name() {
        let now = Utc::now();
        let mut locations = vec![
            Location {
                id: "location::b".to_string(),
                name: "Room B".to_string(),
                created_at: now,
            },
            Location {
                id: "location::a".to_string(),
                name: "Room A".to_string(),
                created_at: now,
            },
        ];
        sort_locations_by_name(&mut locations);
        assert_eq!(locations[0].name, "Room A");
    }

    #[test]
    fn location_sort_folds_case() {
        let now = Utc::now();
        let mut locations: Vec<Location> = ["gamma", "Beta", "alpha"]
            .iter()
            .map(|name| Location {
                id: format!("location::{name}"),
                name: name.to_string(),
                created_at: now,
            })
            .collect();

        sort_locations_by_name(&mut locations);
        let names: Vec<&str> = locations.iter().map(|l| l.name.as_str()).collect();
        // Byte order would put "Beta" first
        assert_eq!(names, vec!["alpha", "Beta", "gamma"]);
    }
}

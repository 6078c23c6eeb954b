use std::collections::HashMap;

use uuid::Uuid;

use crate::core::dates::add_months;
use crate::models::{ChecklistItem, Priority, WeddingProfile};

/// Priority-score boost applied when a template's boost categories intersect
/// the couple's chosen priorities.
const PRIORITY_BOOST: i32 = 2;

/// A hand-authored checklist catalogue entry
///
/// Static configuration shipped with the engine, not a database table.
/// `offset_months` is relative to the wedding date (negative = before).
#[derive(Debug, Clone, Copy)]
pub struct ChecklistTemplate {
    pub task_key: &'static str,
    pub title: &'static str,
    pub offset_months: f64,
    pub notes: &'static str,
    pub base_priority: i32,
    pub priority_boost: &'static [Priority],
    pub dependencies: &'static [&'static str],
    pub category: &'static str,
    pub is_optional: bool,
}

/// The full task catalogue, in authoring order
pub static CHECKLIST_TEMPLATES: &[ChecklistTemplate] = &[
    // Core Setup
    ChecklistTemplate {
        task_key: "set_budget_guestlist",
        title: "Confirm budget + rough guest list",
        offset_months: -12.0,
        notes: "Drives venue/catering choices early; common SA planning anchor.",
        base_priority: 10,
        priority_boost: &[],
        dependencies: &[],
        category: "Core Setup",
        is_optional: false,
    },
    ChecklistTemplate {
        task_key: "choose_location_radius",
        title: "Choose wedding location area + radius",
        offset_months: -12.0,
        notes: "Narrow down to Winelands, coastal, or city area for focused search.",
        base_priority: 9,
        priority_boost: &[],
        dependencies: &["set_budget_guestlist"],
        category: "Core Setup",
        is_optional: false,
    },
    ChecklistTemplate {
        task_key: "choose_style_theme",
        title: "Choose wedding style/theme direction",
        offset_months: -12.0,
        notes: "Rustic, elegant, modern, garden, coastal - helps guide all vendor choices.",
        base_priority: 8,
        priority_boost: &[],
        dependencies: &[],
        category: "Core Setup",
        is_optional: false,
    },
    ChecklistTemplate {
        task_key: "lock_wedding_date",
        title: "Lock wedding date (or shortlist dates)",
        offset_months: -11.0,
        notes: "Essential for booking vendors. Have 2-3 backup dates ready.",
        base_priority: 10,
        priority_boost: &[],
        dependencies: &[],
        category: "Core Setup",
        is_optional: false,
    },
    // Venue & Key Bookings
    ChecklistTemplate {
        task_key: "book_venue",
        title: "Book ceremony + reception venue (or combined)",
        offset_months: -11.0,
        notes: "WC venues (Winelands/coastal) book out early in peak season.",
        base_priority: 10,
        priority_boost: &[Priority::Venue],
        dependencies: &["set_budget_guestlist", "choose_location_radius"],
        category: "Venue & Key Bookings",
        is_optional: false,
    },
    ChecklistTemplate {
        task_key: "confirm_weather_backup",
        title: "Confirm indoor/outdoor plan + weather backup",
        offset_months: -11.0,
        notes: "WC wind/rain planning matters; include indoor option or marquee plan.",
        base_priority: 9,
        priority_boost: &[],
        dependencies: &["book_venue"],
        category: "Venue & Key Bookings",
        is_optional: false,
    },
    ChecklistTemplate {
        task_key: "book_photographer",
        title: "Book photographer (and/or videographer)",
        offset_months: -10.0,
        notes: "Top WC photographers fill fast for Sep\u{2013}Mar.",
        base_priority: 8,
        priority_boost: &[Priority::Photography],
        dependencies: &["lock_wedding_date"],
        category: "Venue & Key Bookings",
        is_optional: false,
    },
    ChecklistTemplate {
        task_key: "book_catering",
        title: "Book caterer / confirm venue catering package",
        offset_months: -9.0,
        notes: "SA weddings often venue-linked; lock menu direction early.",
        base_priority: 8,
        priority_boost: &[Priority::Food],
        dependencies: &["book_venue"],
        category: "Venue & Key Bookings",
        is_optional: false,
    },
    ChecklistTemplate {
        task_key: "bar_beverage_plan",
        title: "Confirm bar plan (open / limited / cash)",
        offset_months: -8.0,
        notes: "Include wine/beer counts; align with venue corkage rules.",
        base_priority: 7,
        priority_boost: &[Priority::Food],
        dependencies: &["book_catering"],
        category: "Venue & Key Bookings",
        is_optional: false,
    },
    ChecklistTemplate {
        task_key: "estimate_alcohol_quantities",
        title: "Estimate wine / alcohol quantities",
        offset_months: -8.0,
        notes: "Plan per-guest consumption; consider SA wine preferences.",
        base_priority: 6,
        priority_boost: &[],
        dependencies: &["bar_beverage_plan"],
        category: "Venue & Key Bookings",
        is_optional: false,
    },
    // Guest Experience & Logistics
    ChecklistTemplate {
        task_key: "decide_destination_logistics",
        title: "Decide on destination-style logistics",
        offset_months: -8.0,
        notes: "If Winelands/Garden Route, plan guest travel and accommodation needs.",
        base_priority: 6,
        priority_boost: &[],
        dependencies: &["book_venue"],
        category: "Guest Experience & Logistics",
        is_optional: false,
    },
    ChecklistTemplate {
        task_key: "accommodation_block",
        title: "Arrange accommodation options or group blocks",
        offset_months: -7.0,
        notes: "Big for Winelands/Garden Route; link options for guests.",
        base_priority: 6,
        priority_boost: &[Priority::Accommodation],
        dependencies: &["decide_destination_logistics"],
        category: "Guest Experience & Logistics",
        is_optional: false,
    },
    ChecklistTemplate {
        task_key: "draft_transport_plan",
        title: "Draft transport plan (buses, shuttles, parking)",
        offset_months: -6.0,
        notes: "Especially important for remote venues or if guests are staying off-site.",
        base_priority: 5,
        priority_boost: &[],
        dependencies: &["accommodation_block"],
        category: "Guest Experience & Logistics",
        is_optional: false,
    },
    ChecklistTemplate {
        task_key: "create_wedding_website",
        title: "Create wedding website or info pack (optional)",
        offset_months: -6.0,
        notes: "Helpful for destination weddings; share travel info, RSVPs, registry.",
        base_priority: 4,
        priority_boost: &[],
        dependencies: &["lock_wedding_date"],
        category: "Guest Experience & Logistics",
        is_optional: true,
    },
    ChecklistTemplate {
        task_key: "send_save_the_dates",
        title: "Send save-the-dates / early guest notice",
        offset_months: -6.0,
        notes: "SA travel logistics; helps guests plan flights/drives early.",
        base_priority: 7,
        priority_boost: &[],
        dependencies: &["lock_wedding_date"],
        category: "Guest Experience & Logistics",
        is_optional: false,
    },
    // Look & Feel
    ChecklistTemplate {
        task_key: "choose_florist",
        title: "Choose florist",
        offset_months: -6.0,
        notes: "Seasonal flowers availability in SA affects cost and look.",
        base_priority: 6,
        priority_boost: &[Priority::Decor],
        dependencies: &["book_venue", "choose_style_theme"],
        category: "Look & Feel",
        is_optional: false,
    },
    ChecklistTemplate {
        task_key: "confirm_decor_items",
        title: "Confirm d\u{e9}cor items (tables, ceremony setup, candles)",
        offset_months: -5.0,
        notes: "Work with florist and venue on what's allowed (candles, hanging items, etc.).",
        base_priority: 5,
        priority_boost: &[],
        dependencies: &["choose_florist"],
        category: "Look & Feel",
        is_optional: false,
    },
    ChecklistTemplate {
        task_key: "attire_order",
        title: "Order attire (dress / suit)",
        offset_months: -6.0,
        notes: "Imports/alterations can take time; boutiques book fittings.",
        base_priority: 6,
        priority_boost: &[],
        dependencies: &["choose_style_theme"],
        category: "Look & Feel",
        is_optional: false,
    },
    ChecklistTemplate {
        task_key: "book_fittings_timeline",
        title: "Book fittings / alterations timeline",
        offset_months: -5.0,
        notes: "Schedule first fitting, second fitting, and final pickup dates.",
        base_priority: 5,
        priority_boost: &[],
        dependencies: &["attire_order"],
        category: "Look & Feel",
        is_optional: false,
    },
    ChecklistTemplate {
        task_key: "decide_hair_makeup_approach",
        title: "Decide hair & makeup approach",
        offset_months: -5.0,
        notes: "DIY, salon, or on-site artist? Consider trial run.",
        base_priority: 5,
        priority_boost: &[],
        dependencies: &["choose_style_theme"],
        category: "Look & Feel",
        is_optional: false,
    },
    ChecklistTemplate {
        task_key: "book_hair_makeup",
        title: "Book hair & makeup artist",
        offset_months: -4.0,
        notes: "Popular artists book early; consider trial session.",
        base_priority: 5,
        priority_boost: &[],
        dependencies: &["lock_wedding_date"],
        category: "Look & Feel",
        is_optional: false,
    },
    // Admin & Legal
    ChecklistTemplate {
        task_key: "confirm_officiant",
        title: "Confirm officiant / marriage officer",
        offset_months: -5.0,
        notes: "Religious or civil ceremony? Book early for popular dates.",
        base_priority: 7,
        priority_boost: &[],
        dependencies: &[],
        category: "Admin & Legal",
        is_optional: false,
    },
    ChecklistTemplate {
        task_key: "check_home_affairs",
        title: "Check Home Affairs requirements",
        offset_months: -4.0,
        notes: "Understand documentation needed (ID, birth certificates, etc.).",
        base_priority: 7,
        priority_boost: &[],
        dependencies: &["confirm_officiant"],
        category: "Admin & Legal",
        is_optional: false,
    },
    ChecklistTemplate {
        task_key: "prepare_marriage_docs",
        title: "Prepare marriage documentation",
        offset_months: -2.0,
        notes: "Gather all required documents; make copies.",
        base_priority: 8,
        priority_boost: &[],
        dependencies: &["check_home_affairs"],
        category: "Admin & Legal",
        is_optional: false,
    },
    // Final Details
    ChecklistTemplate {
        task_key: "send_formal_invitations",
        title: "Send formal invitations",
        offset_months: -4.0,
        notes: "Include RSVP deadline, accommodation info, and registry if applicable.",
        base_priority: 7,
        priority_boost: &[],
        dependencies: &["book_venue", "accommodation_block"],
        category: "Final Details",
        is_optional: false,
    },
    ChecklistTemplate {
        task_key: "confirm_menu_tastings",
        title: "Confirm menu choices & tastings",
        offset_months: -3.0,
        notes: "Schedule tasting session; finalize dietary requirements handling.",
        base_priority: 6,
        priority_boost: &[],
        dependencies: &["book_catering"],
        category: "Final Details",
        is_optional: false,
    },
    ChecklistTemplate {
        task_key: "plan_seating_layout",
        title: "Plan seating layout approach",
        offset_months: -2.0,
        notes: "Start with rough plan; refine as RSVPs come in.",
        base_priority: 5,
        priority_boost: &[],
        dependencies: &["send_formal_invitations"],
        category: "Final Details",
        is_optional: false,
    },
    ChecklistTemplate {
        task_key: "choose_music_plan",
        title: "Choose music plan (DJ / playlist / band)",
        offset_months: -3.0,
        notes: "Consider venue sound rules, space, and vibe.",
        base_priority: 5,
        priority_boost: &[],
        dependencies: &["book_venue"],
        category: "Final Details",
        is_optional: false,
    },
    ChecklistTemplate {
        task_key: "book_dj_band",
        title: "Book DJ / band (if applicable)",
        offset_months: -3.0,
        notes: "Popular DJs and bands book early; confirm sound requirements.",
        base_priority: 5,
        priority_boost: &[Priority::MusicParty],
        dependencies: &["choose_music_plan"],
        category: "Final Details",
        is_optional: false,
    },
    ChecklistTemplate {
        task_key: "confirm_decor_quantities",
        title: "Confirm d\u{e9}cor quantities & floor plan",
        offset_months: -2.0,
        notes: "Finalize table count, centerpieces, ceremony setup based on final guest count.",
        base_priority: 5,
        priority_boost: &[],
        dependencies: &["plan_seating_layout"],
        category: "Final Details",
        is_optional: false,
    },
    // Countdown
    ChecklistTemplate {
        task_key: "finalise_guest_list",
        title: "Finalise guest list & RSVPs",
        offset_months: -1.5,
        notes: "Chase late RSVPs; confirm final numbers with all vendors.",
        base_priority: 8,
        priority_boost: &[],
        dependencies: &["send_formal_invitations"],
        category: "Countdown",
        is_optional: false,
    },
    ChecklistTemplate {
        task_key: "confirm_transport_numbers",
        title: "Confirm transport numbers",
        offset_months: -1.0,
        notes: "Finalize shuttle/bus bookings based on confirmed guest count.",
        base_priority: 6,
        priority_boost: &[],
        dependencies: &["finalise_guest_list"],
        category: "Countdown",
        is_optional: false,
    },
    ChecklistTemplate {
        task_key: "confirm_accommodation_bookings",
        title: "Confirm accommodation bookings",
        offset_months: -1.0,
        notes: "Verify all guest accommodation is confirmed; share details.",
        base_priority: 6,
        priority_boost: &[],
        dependencies: &["finalise_guest_list"],
        category: "Countdown",
        is_optional: false,
    },
    ChecklistTemplate {
        task_key: "create_wedding_timeline",
        title: "Create wedding day timeline",
        offset_months: -1.0,
        notes: "Detailed hour-by-hour schedule; share with all vendors and key people.",
        base_priority: 8,
        priority_boost: &[],
        dependencies: &[],
        category: "Countdown",
        is_optional: false,
    },
    ChecklistTemplate {
        task_key: "confirm_all_vendors",
        title: "Confirm all vendors (final details)",
        offset_months: -3.0,
        notes: "Final check-ins: arrival times, contact numbers, special requests.",
        base_priority: 8,
        priority_boost: &[],
        dependencies: &["create_wedding_timeline"],
        category: "Countdown",
        is_optional: false,
    },
    ChecklistTemplate {
        task_key: "prepare_payment_schedule",
        title: "Prepare payment schedule & tips",
        offset_months: -2.0,
        notes: "Organize final payments, tips envelopes, and vendor thank-yous.",
        base_priority: 6,
        priority_boost: &[],
        dependencies: &[],
        category: "Countdown",
        is_optional: false,
    },
    // Week Of / Day-Of
    ChecklistTemplate {
        task_key: "pack_emergency_kit",
        title: "Pack emergency kit",
        offset_months: 0.0,
        notes: "Safety pins, tape, scissors, painkillers, stain remover, phone charger, etc.",
        base_priority: 5,
        priority_boost: &[],
        dependencies: &[],
        category: "Week Of / Day-Of",
        is_optional: false,
    },
    ChecklistTemplate {
        task_key: "final_venue_walkthrough",
        title: "Final venue walkthrough (if possible)",
        offset_months: 0.0,
        notes: "Confirm setup locations, parking, access points with venue coordinator.",
        base_priority: 6,
        priority_boost: &[],
        dependencies: &[],
        category: "Week Of / Day-Of",
        is_optional: true,
    },
    ChecklistTemplate {
        task_key: "confirm_weather_backup_activation",
        title: "Confirm weather + backup activation",
        offset_months: 0.0,
        notes: "Check forecast; activate indoor/marquee backup if needed.",
        base_priority: 7,
        priority_boost: &[],
        dependencies: &["confirm_weather_backup"],
        category: "Week Of / Day-Of",
        is_optional: false,
    },
    ChecklistTemplate {
        task_key: "handoff_coordination",
        title: "Hand off coordination to trusted person",
        offset_months: 0.0,
        notes: "Delegate day-of coordination to wedding coordinator or trusted friend/family.",
        base_priority: 7,
        priority_boost: &[],
        dependencies: &["create_wedding_timeline"],
        category: "Week Of / Day-Of",
        is_optional: false,
    },
];

/// Generate checklist items for a wedding profile
///
/// Every catalogue entry becomes a fresh item: due date from the wedding date
/// plus the entry's month offset (or none without a date), priority score
/// from the base priority plus a boost when the entry's boost categories
/// intersect the couple's priorities, reminders on, nothing completed.
///
/// Items with a due date sort by date ascending and always before undated
/// items; ties (and the undated tail) sort by priority score descending.
pub fn generate_checklist(profile: &WeddingProfile) -> Vec<ChecklistItem> {
    let mut items: Vec<ChecklistItem> = CHECKLIST_TEMPLATES
        .iter()
        .map(|template| {
            let due_date = profile
                .wedding_date
                .map(|date| add_months(date, template.offset_months));

            let mut priority_score = template.base_priority;
            let boosted = template
                .priority_boost
                .iter()
                .any(|boost| profile.priorities.contains(boost));
            if boosted {
                priority_score += PRIORITY_BOOST;
            }

            ChecklistItem {
                id: Uuid::new_v4().to_string(),
                task_key: template.task_key.to_string(),
                title: template.title.to_string(),
                due_date,
                completed: false,
                priority_score,
                notes: template.notes.to_string(),
                reminder_enabled: true,
                category: template.category.to_string(),
                dependencies: template.dependencies.iter().map(|d| d.to_string()).collect(),
                is_optional: template.is_optional,
            }
        })
        .collect();

    items.sort_by(|a, b| match (a.due_date, b.due_date) {
        (Some(da), Some(db)) => da
            .cmp(&db)
            .then_with(|| b.priority_score.cmp(&a.priority_score)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => b.priority_score.cmp(&a.priority_score),
    });

    items
}

/// Reconcile freshly generated items with previously persisted ones
///
/// For every fresh item with a matching task key in `existing`, the existing
/// identifier, completed flag, and reminder flag are carried over; title, due
/// date, priority score, and category stay as regenerated. Items whose task
/// key is no longer in the catalogue are implicitly dropped.
pub fn merge_checklist(
    fresh: Vec<ChecklistItem>,
    existing: &[ChecklistItem],
) -> Vec<ChecklistItem> {
    let by_key: HashMap<&str, &ChecklistItem> = existing
        .iter()
        .map(|item| (item.task_key.as_str(), item))
        .collect();

    fresh
        .into_iter()
        .map(|mut item| {
            if let Some(previous) = by_key.get(item.task_key.as_str()) {
                item.id = previous.id.clone();
                item.completed = previous.completed;
                item.reminder_enabled = previous.reminder_enabled;
            }
            item
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn profile_with_date(date: Option<NaiveDate>) -> WeddingProfile {
        WeddingProfile {
            wedding_date: date,
            guest_count_range: None,
            total_budget: None,
            location: String::new(),
            location_lat: None,
            location_lng: None,
            radius_km: None,
            theme_primary: String::new(),
            theme_secondary: None,
            theme_tags: vec![],
            theme_colors: vec![],
            priorities: vec![],
        }
    }

    fn wedding_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 15).unwrap()
    }

    #[test]
    fn test_catalogue_size_and_unique_keys() {
        assert_eq!(CHECKLIST_TEMPLATES.len(), 40);

        let mut keys: Vec<&str> = CHECKLIST_TEMPLATES.iter().map(|t| t.task_key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 40, "task keys must be unique");
    }

    #[test]
    fn test_dependencies_reference_known_keys() {
        for template in CHECKLIST_TEMPLATES {
            for dep in template.dependencies {
                assert!(
                    CHECKLIST_TEMPLATES.iter().any(|t| t.task_key == *dep),
                    "{} depends on unknown key {}",
                    template.task_key,
                    dep
                );
            }
        }
    }

    #[test]
    fn test_generate_computes_due_dates() {
        let items = generate_checklist(&profile_with_date(Some(wedding_date())));

        let budget = items
            .iter()
            .find(|i| i.task_key == "set_budget_guestlist")
            .unwrap();
        assert_eq!(
            budget.due_date,
            Some(NaiveDate::from_ymd_opt(2025, 9, 15).unwrap())
        );

        let day_of = items
            .iter()
            .find(|i| i.task_key == "pack_emergency_kit")
            .unwrap();
        assert_eq!(day_of.due_date, Some(wedding_date()));

        // -1.5 months: one month and fifteen days before.
        let rsvps = items
            .iter()
            .find(|i| i.task_key == "finalise_guest_list")
            .unwrap();
        assert_eq!(
            rsvps.due_date,
            Some(NaiveDate::from_ymd_opt(2026, 7, 31).unwrap())
        );
    }

    #[test]
    fn test_generate_without_date_leaves_due_dates_empty() {
        let items = generate_checklist(&profile_with_date(None));
        assert_eq!(items.len(), 40);
        assert!(items.iter().all(|i| i.due_date.is_none()));
        // Without dates the list is ordered by priority score alone.
        for pair in items.windows(2) {
            assert!(pair[0].priority_score >= pair[1].priority_score);
        }
    }

    #[test]
    fn test_priority_boost_applied() {
        let mut profile = profile_with_date(None);
        profile.priorities = vec![Priority::Photography];

        let items = generate_checklist(&profile);
        let photographer = items
            .iter()
            .find(|i| i.task_key == "book_photographer")
            .unwrap();
        assert_eq!(photographer.priority_score, 10); // 8 + 2

        let venue = items.iter().find(|i| i.task_key == "book_venue").unwrap();
        assert_eq!(venue.priority_score, 10); // unboosted base
    }

    #[test]
    fn test_sorted_by_due_date_then_priority() {
        let items = generate_checklist(&profile_with_date(Some(wedding_date())));

        for pair in items.windows(2) {
            match (pair[0].due_date, pair[1].due_date) {
                (Some(da), Some(db)) => {
                    assert!(da <= db);
                    if da == db {
                        assert!(pair[0].priority_score >= pair[1].priority_score);
                    }
                }
                (None, Some(_)) => panic!("undated item sorted before dated item"),
                _ => {}
            }
        }
    }

    #[test]
    fn test_merge_preserves_completion_state() {
        let profile = profile_with_date(Some(wedding_date()));
        let mut first = generate_checklist(&profile);

        let venue_index = first
            .iter()
            .position(|i| i.task_key == "book_venue")
            .unwrap();
        first[venue_index].completed = true;
        first[venue_index].reminder_enabled = false;
        let original_id = first[venue_index].id.clone();

        // Regenerate after the wedding date moved.
        let mut moved = profile_with_date(Some(
            NaiveDate::from_ymd_opt(2027, 3, 1).unwrap(),
        ));
        moved.priorities = vec![Priority::Venue];
        let merged = merge_checklist(generate_checklist(&moved), &first);

        assert_eq!(merged.len(), 40);
        let venue = merged.iter().find(|i| i.task_key == "book_venue").unwrap();
        assert!(venue.completed);
        assert!(!venue.reminder_enabled);
        assert_eq!(venue.id, original_id);
        // Recomputed fields follow the new profile.
        assert_eq!(
            venue.due_date,
            Some(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap())
        );
        assert_eq!(venue.priority_score, 12); // 10 + 2 boost

        // Untouched items keep their defaults.
        let officiant = merged
            .iter()
            .find(|i| i.task_key == "confirm_officiant")
            .unwrap();
        assert!(!officiant.completed);
        assert!(officiant.reminder_enabled);
    }

    #[test]
    fn test_merge_drops_unknown_task_keys() {
        let profile = profile_with_date(None);
        let mut existing = generate_checklist(&profile);
        existing.push(ChecklistItem {
            id: "legacy".to_string(),
            task_key: "retired_task".to_string(),
            title: "No longer in the catalogue".to_string(),
            due_date: None,
            completed: true,
            priority_score: 1,
            notes: String::new(),
            reminder_enabled: true,
            category: String::new(),
            dependencies: vec![],
            is_optional: false,
        });

        let merged = merge_checklist(generate_checklist(&profile), &existing);
        assert_eq!(merged.len(), 40);
        assert!(merged.iter().all(|i| i.task_key != "retired_task"));
    }
}

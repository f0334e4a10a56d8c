#![forbid(unsafe_code)]

//! Default board contents and the fixed category set.
//!
//! Categories are a closed enumeration owned by the application; the core
//! never creates or deletes them. The seed board is what a first launch
//! (or an explicit reset) starts from.

use pollboard_core::{Category, CategoryId, Poll, PollId, PollOption, PollSet};

/// The fixed column set, in display order.
#[must_use]
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("GENERAL", "General"),
        Category::new("PROTOSS", "Protoss"),
        Category::new("TERRAN", "Terran"),
        Category::new("ZERG", "Zerg"),
        Category::new("TALDARIM", "Tal'Darim"),
        Category::new("MENGSEK", "Mengsk"),
        Category::new("KERRIGAN", "Kerrigan"),
        Category::new("MOEBIUS", "Moebius"),
        Category::new("NOVA", "Nova"),
        Category::new("TYCHUS", "Tychus"),
        Category::new("STUKOV", "Stukov"),
        Category::new("UNSORTED", "Unsorted Bin"),
    ]
}

/// Ids of the fixed columns, in display order (the export sequence).
#[must_use]
pub fn default_category_sequence() -> Vec<CategoryId> {
    default_categories()
        .into_iter()
        .map(|category| category.id)
        .collect()
}

fn seed_poll(
    id: &str,
    category: &str,
    order: f64,
    description: &str,
    tags: &[&str],
    options: &[(&str, &str)],
) -> Poll {
    Poll {
        id: PollId::from(id),
        category: CategoryId::from(category),
        description: description.to_owned(),
        options: options
            .iter()
            .map(|(id, text)| PollOption::new(*id, *text))
            .collect(),
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        thread_title: None,
        order,
    }
}

/// The default starting board.
#[must_use]
pub fn seed_board() -> PollSet {
    [
        seed_poll(
            "poll_zerg_aberration",
            "ZERG",
            10.0,
            "How functional would the Zerg faction be if Aberration was removed and made exclusive to Stukov?",
            &[],
            &[
                ("opt_za_1", "This would be fine – I don't see any real issues with removing it."),
                ("opt_za_2", "The faction would be fine, but I'd be sad – It's not necessary, but I'd miss it."),
                ("opt_za_3", "Some buffs would be needed – Zerg would still work, but you'd need to tweak a few things to compensate."),
                ("opt_za_4", "This would be a significant issue – Removing Aberration would hurt the faction in a big way and be hard to fix."),
                ("opt_za_5", "Aberration is core to Zerg – It's too central to remove and would be an unfair nerf."),
            ],
        ),
        seed_poll(
            "poll_general_4v4",
            "GENERAL",
            20.0,
            "Do you think Standard 4v4 games are now longer than they used to be on average?",
            &[],
            &[
                ("cecdc4dc", "Yes, games feel much longer"),
                ("559ab2a2", "Yes, games feel a bit longer"),
                ("142ff072", "Unsure, no noticeable difference"),
                ("e507c45e", "No, games feel shorter"),
            ],
        ),
        seed_poll(
            "poll_terran_bunker",
            "TERRAN",
            10.0,
            "The Terran Bunker in Standard 4v4 games is:",
            &["balance"],
            &[
                ("e3ef17e0", "Overpowered"),
                ("a757adac", "Stronger than balanced"),
                ("fdaa1b0b", "Balanced"),
                ("442ef5fb", "Weaker than balanced"),
                ("4daa5607", "Underpowered"),
            ],
        ),
    ]
    .into_iter()
    .map(|poll| (poll.id.clone(), poll))
    .collect()
}

use profileguard_types::{
    ExternalManagement, MaturityRating, Profile, ProfileKind, ProfileLock, ViewingEntry,
};

/// The fixed household used when a session supplies no profiles of its own.
pub fn seed_profiles() -> Vec<Profile> {
    vec![
        Profile {
            id: "emma".to_string(),
            name: "Emma".to_string(),
            kind: ProfileKind::Kids,
            maturity_rating: MaturityRating::R,
            blocked_titles: Vec::new(),
            profile_lock: ProfileLock::default(),
            autoplay_next_episode: true,
            autoplay_previews: true,
            viewing_history: vec![
                watched("Bluey", MaturityRating::G, 42),
                watched("Stranger Things", MaturityRating::Pg13, 95),
                watched("Squid Game", MaturityRating::R, 120),
            ],
            externally_managed: ExternalManagement::default(),
        },
        Profile {
            id: "noah".to_string(),
            name: "Noah".to_string(),
            kind: ProfileKind::Kids,
            maturity_rating: MaturityRating::Pg,
            blocked_titles: vec!["Stranger Things".to_string()],
            profile_lock: ProfileLock::default(),
            autoplay_next_episode: true,
            autoplay_previews: false,
            viewing_history: vec![
                watched("Paw Patrol", MaturityRating::G, 66),
                watched("Kung Fu Panda", MaturityRating::Pg, 92),
            ],
            externally_managed: ExternalManagement::default(),
        },
        Profile {
            id: "sarah".to_string(),
            name: "Sarah".to_string(),
            kind: ProfileKind::Standard,
            maturity_rating: MaturityRating::Nc17,
            blocked_titles: Vec::new(),
            profile_lock: ProfileLock {
                enabled: true,
                pin: Some("1234".to_string()),
            },
            autoplay_next_episode: true,
            autoplay_previews: true,
            viewing_history: vec![watched("The Crown", MaturityRating::R, 58)],
            externally_managed: ExternalManagement::default(),
        },
        Profile {
            id: "david".to_string(),
            name: "David".to_string(),
            kind: ProfileKind::Adult,
            maturity_rating: MaturityRating::Nc17,
            blocked_titles: Vec::new(),
            profile_lock: ProfileLock::default(),
            autoplay_next_episode: false,
            autoplay_previews: true,
            viewing_history: Vec::new(),
            externally_managed: ExternalManagement::default(),
        },
    ]
}

fn watched(title: &str, rating: MaturityRating, minutes: u32) -> ViewingEntry {
    ViewingEntry {
        title: title.to_string(),
        rating,
        minutes,
    }
}

use crate::types::Profile;

/// Shown when the profile has no contact handle.
pub const TWITTER_FALLBACK: &str = "Not available";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub login: String,
    pub avatar_url: String,
    pub profile_url: String,
    pub name: String,
    pub bio: String,
    pub location: String,
    pub twitter: String,
}

impl From<&Profile> for ProfileCard {
    fn from(profile: &Profile) -> Self {
        let text = |field: &Option<String>| field.clone().unwrap_or_default();

        ProfileCard {
            login: profile.login.clone(),
            avatar_url: profile.avatar_url.clone(),
            profile_url: profile.html_url.clone(),
            name: text(&profile.name),
            bio: text(&profile.bio),
            location: text(&profile.location),
            twitter: profile
                .twitter_username
                .as_deref()
                .filter(|handle| !handle.is_empty())
                .unwrap_or(TWITTER_FALLBACK)
                .to_string(),
        }
    }
}

pub const DEFAULT_TARGET: i64 = 2000;
pub const DEFAULT_AVATAR: &str = "https://picsum.photos/seed/lightlog/200/200";

/// Small user preferences kept next to the entry log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub avatar: String,
    pub reminders_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            avatar: DEFAULT_AVATAR.to_string(),
            reminders_enabled: false,
        }
    }
}

impl Settings {
    pub fn has_embedded_avatar(&self) -> bool {
        self.avatar.starts_with("data:")
    }
}

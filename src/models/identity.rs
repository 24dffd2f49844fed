/// Who is asking. Every query and write takes one of these explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub email: Option<String>,
    pub is_admin: bool,
}

impl Identity {
    /// Build an identity, flagging it as admin when `email` matches `admin_email`
    /// (case-insensitive).
    pub fn new(user_id: &str, email: Option<&str>, admin_email: Option<&str>) -> Self {
        let is_admin = match (email, admin_email) {
            (Some(e), Some(a)) => !a.trim().is_empty() && e.trim().eq_ignore_ascii_case(a.trim()),
            _ => false,
        };

        Self {
            user_id: user_id.to_string(),
            email: email.map(str::to_string),
            is_admin,
        }
    }

    pub fn user(user_id: &str) -> Self {
        Self::new(user_id, None, None)
    }
}

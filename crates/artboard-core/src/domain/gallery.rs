//! Gallery actions that need a signed-in user

use serde::{Deserialize, Serialize};

use super::user::AuthUser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GalleryAction {
    Report,
    UpVote,
    DownVote,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome<'a> {
    Proceed(&'a AuthUser),
    LoginRequired(&'static str),
}

impl GalleryAction {
    pub fn login_required_message(&self) -> &'static str {
        match self {
            GalleryAction::Report => "You must be logged in to report an artwork.",
            GalleryAction::UpVote => "You must be logged in to upvote an artwork.",
            GalleryAction::DownVote => "You must be logged in to downvote an artwork.",
        }
    }

    pub fn guard<'a>(&self, user: Option<&'a AuthUser>) -> GuardOutcome<'a> {
        match user {
            Some(user) => GuardOutcome::Proceed(user),
            None => GuardOutcome::LoginRequired(self.login_required_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn anonymous_votes_need_login() {
        assert_eq!(
            GalleryAction::UpVote.guard(None),
            GuardOutcome::LoginRequired("You must be logged in to upvote an artwork.")
        );
        assert_eq!(
            GalleryAction::DownVote.guard(None),
            GuardOutcome::LoginRequired("You must be logged in to downvote an artwork.")
        );
    }

    #[test]
    fn signed_in_user_proceeds() {
        let user = AuthUser::new(Uuid::new_v4(), None, None);
        assert_eq!(GalleryAction::Report.guard(Some(&user)), GuardOutcome::Proceed(&user));
    }
}

//! # Session controller
//!
//! One [`Session`] value per client, created with defaults and passed
//! explicitly through every handler; there is no ambient session state.
//! It tracks three things:
//!
//! - the logged-in user (`None` means logged out),
//! - the active page, gated by login state ([`Session::select_page`]),
//! - the `report_visible` flag, set only by a successful prediction and
//!   cleared on logout. It survives page re-selection until a new
//!   prediction overwrites it.
//!
//! Logout always returns the session to its defaults: logged out, `Home`,
//! report hidden.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::UserInfo;

/// Pages the application can show. `Login` and `Signup` are reachable only
/// while logged out; the rest only while logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    Login,
    Signup,
    Home,
    DiabetesPrediction,
    HeartDiseasePrediction,
    ParkinsonsPrediction,
    Feedback,
    Logout,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Login => "Login",
            Page::Signup => "Signup",
            Page::Home => "Home",
            Page::DiabetesPrediction => "Diabetes Prediction",
            Page::HeartDiseasePrediction => "Heart Disease Prediction",
            Page::ParkinsonsPrediction => "Parkinson's Prediction",
            Page::Feedback => "Feedback and Contact",
            Page::Logout => "Logout",
        }
    }

    pub fn requires_login(&self) -> bool {
        !matches!(self, Page::Login | Page::Signup)
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

const LOGGED_OUT_PAGES: &[Page] = &[Page::Login, Page::Signup];

const LOGGED_IN_PAGES: &[Page] = &[
    Page::Home,
    Page::DiabetesPrediction,
    Page::HeartDiseasePrediction,
    Page::ParkinsonsPrediction,
    Page::Feedback,
    Page::Logout,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("please log in to open the {0} page")]
    LoginRequired(Page),
    #[error("the {0} page is unavailable while logged in")]
    AlreadyLoggedIn(Page),
}

/// Per-client interaction state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    user: Option<UserInfo>,
    active_page: Page,
    report_visible: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            user: None,
            active_page: Page::Home,
            report_visible: false,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    pub fn active_page(&self) -> Page {
        self.active_page
    }

    pub fn report_visible(&self) -> bool {
        self.report_visible
    }

    /// The menu for the current login state.
    pub fn available_pages(&self) -> &'static [Page] {
        if self.logged_in() {
            LOGGED_IN_PAGES
        } else {
            LOGGED_OUT_PAGES
        }
    }

    /// Switch pages. Selecting a page outside the current state's menu is an
    /// error and leaves the session unchanged.
    pub fn select_page(&mut self, page: Page) -> Result<(), SessionError> {
        match (self.logged_in(), page.requires_login()) {
            (false, true) => Err(SessionError::LoginRequired(page)),
            (true, false) => Err(SessionError::AlreadyLoggedIn(page)),
            _ => {
                self.active_page = page;
                Ok(())
            }
        }
    }

    pub(crate) fn log_in(&mut self, user: UserInfo) {
        self.user = Some(user);
        self.active_page = Page::Home;
    }

    pub(crate) fn log_out(&mut self) {
        self.user = None;
        self.active_page = Page::Home;
        self.report_visible = false;
    }

    pub(crate) fn mark_report_available(&mut self) {
        self.report_visible = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in_session() -> Session {
        let mut session = Session::new();
        session.log_in(UserInfo {
            id: "1".into(),
            name: "Asha".into(),
            email: "asha@gmail.com".into(),
        });
        session
    }

    #[test]
    fn defaults_are_logged_out_on_home() {
        let session = Session::new();
        assert!(!session.logged_in());
        assert_eq!(session.active_page(), Page::Home);
        assert!(!session.report_visible());
        assert_eq!(session.available_pages(), LOGGED_OUT_PAGES);
    }

    #[test]
    fn logout_resets_page_and_report_flag() {
        let mut session = logged_in_session();
        session.select_page(Page::ParkinsonsPrediction).unwrap();
        session.mark_report_available();

        session.log_out();
        assert!(!session.logged_in());
        assert_eq!(session.active_page(), Page::Home);
        assert!(!session.report_visible());
    }

    #[test]
    fn prediction_pages_need_login() {
        let mut session = Session::new();
        let err = session.select_page(Page::DiabetesPrediction).unwrap_err();
        assert_eq!(err, SessionError::LoginRequired(Page::DiabetesPrediction));
        assert_eq!(session.active_page(), Page::Home);
    }

    #[test]
    fn login_page_is_unreachable_once_logged_in() {
        let mut session = logged_in_session();
        let err = session.select_page(Page::Login).unwrap_err();
        assert_eq!(err, SessionError::AlreadyLoggedIn(Page::Login));
    }

    #[test]
    fn report_flag_survives_page_changes() {
        let mut session = logged_in_session();
        session.select_page(Page::DiabetesPrediction).unwrap();
        session.mark_report_available();

        session.select_page(Page::HeartDiseasePrediction).unwrap();
        assert!(session.report_visible());
    }
}

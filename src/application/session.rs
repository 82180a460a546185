//! Session controller
//!
//! Process-local view state: which screen is showing, which customer is
//! selected, and the transient success/error banner. Screens are a closed
//! sum type so navigation is exhaustively matched at compile time; each
//! variant carries exactly the data its screen needs.
//!
//! Transition table (outcome -> next screen):
//! - add success        -> CustomerList
//! - add failure        -> stays on AddCustomer, error notice
//! - update success     -> CustomerDetail
//! - update failure     -> current screen kept, error notice
//! - delete (confirmed) -> CustomerList
//! - view customer      -> CustomerDetail
//! - login success      -> Dashboard; failure keeps Login

use chrono::{DateTime, Duration, Utc};

/// How long a notice stays on screen
pub const NOTICE_TTL_SECS: i64 = 3;

/// The screens of the application, admin and public alike
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Public landing page with the self-service lookup
    PublicHome,
    Login,
    Dashboard,
    CustomerList,
    CustomerDetail { id: String },
    AddCustomer,
    EditCustomer { id: String },
}

/// A user action together with its outcome, as reported by the caller
/// after running the corresponding use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    LoginSucceeded,
    LoginFailed,
    Logout,
    OpenDashboard,
    OpenList,
    OpenAddForm,
    OpenEditForm { id: String },
    ViewCustomer { id: String },
    AddSucceeded,
    AddFailed,
    UpdateSucceeded { id: String },
    UpdateFailed,
    DeleteConfirmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient banner; expired notices are simply no longer reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    expires_at: DateTime<Utc>,
}

impl Notice {
    fn new(kind: NoticeKind, message: String, now: DateTime<Utc>) -> Self {
        Self {
            kind,
            message,
            expires_at: now + Duration::seconds(NOTICE_TTL_SECS),
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Tracks the current screen and the pending notice
#[derive(Debug, Clone)]
pub struct SessionController {
    screen: Screen,
    notice: Option<Notice>,
}

impl SessionController {
    pub fn new(initial: Screen) -> Self {
        Self {
            screen: initial,
            notice: None,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The pending notice, unless it has already expired at `now`
    pub fn notice_at(&self, now: DateTime<Utc>) -> Option<&Notice> {
        self.notice.as_ref().filter(|n| !n.is_expired_at(now))
    }

    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::new(NoticeKind::Success, message.into(), Utc::now()));
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::new(NoticeKind::Error, message.into(), Utc::now()));
    }

    /// Apply one intent and return the resulting screen.
    ///
    /// Failed operations keep the current screen; the caller surfaces the
    /// error through `notify_error`.
    pub fn apply(&mut self, intent: Intent) -> &Screen {
        self.screen = match intent {
            Intent::LoginSucceeded => Screen::Dashboard,
            Intent::LoginFailed => Screen::Login,
            Intent::Logout => Screen::PublicHome,
            Intent::OpenDashboard => Screen::Dashboard,
            Intent::OpenList => Screen::CustomerList,
            Intent::OpenAddForm => Screen::AddCustomer,
            Intent::OpenEditForm { id } => Screen::EditCustomer { id },
            Intent::ViewCustomer { id } => Screen::CustomerDetail { id },
            Intent::AddSucceeded => Screen::CustomerList,
            Intent::AddFailed => Screen::AddCustomer,
            Intent::UpdateSucceeded { id } => Screen::CustomerDetail { id },
            Intent::UpdateFailed => self.screen.clone(),
            Intent::DeleteConfirmed => Screen::CustomerList,
        };
        &self.screen
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new(Screen::PublicHome)
    }
}

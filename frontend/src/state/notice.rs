use crate::error::AppError;
use leptos::*;

/// The last success or failure message shown after a user action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeState {
    pub success: Option<String>,
    pub error: Option<AppError>,
}

impl NoticeState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, err: AppError) {
        self.error = Some(err);
        self.success = None;
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }
}

pub fn use_notice() -> RwSignal<NoticeState> {
    match use_context::<RwSignal<NoticeState>>() {
        Some(notice) => notice,
        None => {
            let notice = create_rw_signal(NoticeState::default());
            provide_context(notice);
            notice
        }
    }
}

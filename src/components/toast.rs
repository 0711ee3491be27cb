//! Transient Notification
//!
//! Single-slot toast: setting a message replaces the visible one, and
//! every message clears itself after a fixed delay. A generation counter
//! keeps an older expiry timer from wiping a newer message, so the most
//! recently set message is always the one on screen.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a notice stays on screen
const NOTICE_MS: u32 = 4_000;

/// Visual tone of a notice
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Error => "notice notice-error",
            NoticeKind::Info => "notice notice-info",
        }
    }
}

/// One visible notice
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    seq: u32,
}

/// Handle to the app-wide notice slot, provided via context
#[derive(Clone, Copy)]
pub struct Toasts {
    notice: ReadSignal<Option<Notice>>,
    set_notice: WriteSignal<Option<Notice>>,
    next_seq: StoredValue<u32>,
}

impl Toasts {
    pub fn new() -> Self {
        let (notice, set_notice) = signal(None);
        Self {
            notice,
            set_notice,
            next_seq: StoredValue::new(0),
        }
    }

    /// Show a notice, replacing any visible one. It clears itself after
    /// `NOTICE_MS` unless a newer notice has taken the slot by then.
    pub fn show(&self, kind: NoticeKind, text: impl Into<String>) {
        let seq = self.next_seq.get_value() + 1;
        self.next_seq.set_value(seq);
        self.set_notice.set(Some(Notice {
            kind,
            text: text.into(),
            seq,
        }));

        let notice = self.notice;
        let set_notice = self.set_notice;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_MS).await;
            if notice.get_untracked().is_some_and(|n| n.seq == seq) {
                set_notice.set(None);
            }
        });
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(NoticeKind::Success, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(NoticeKind::Error, text);
    }

    pub fn info(&self, text: impl Into<String>) {
        self.show(NoticeKind::Info, text);
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the toast handle from context
pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

/// Banner rendering the current notice, if any
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let toasts = use_toasts();
    move || {
        toasts.notice.get().map(|notice| {
            view! { <div class=notice.kind.class()>{notice.text}</div> }
        })
    }
}

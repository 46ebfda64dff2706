#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastAction {
    Dismiss,
    /// Re-submit the same, preserved form values.
    Retry,
}

impl ToastAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dismiss => "Dismiss",
            Self::Retry => "Retry",
        }
    }
}

/// A notification describing where a submission stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub description: String,
    pub action: Option<ToastAction>,
}

impl Toast {
    pub fn pending() -> Self {
        Self {
            kind: ToastKind::Loading,
            message: "Sending your message...".to_owned(),
            description: "Please wait while we submit your form".to_owned(),
            action: None,
        }
    }

    pub fn sent() -> Self {
        Self {
            kind: ToastKind::Success,
            message: "Message sent successfully!".to_owned(),
            description: "I will get back to you soon".to_owned(),
            action: Some(ToastAction::Dismiss),
        }
    }

    pub fn failed(description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: "Failed to send message".to_owned(),
            description: description.into(),
            action: Some(ToastAction::Retry),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == ToastKind::Success
    }

    pub fn is_error(&self) -> bool {
        self.kind == ToastKind::Error
    }

    pub fn can_retry(&self) -> bool {
        self.action == Some(ToastAction::Retry)
    }

    pub fn action_label(&self) -> &'static str {
        self.action.map(|a| a.label()).unwrap_or_default()
    }
}

use anyhow::Result as Fallible;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

pub trait NotificationGateway {
    fn notify(&self, notification: &Notification) -> Fallible<()>;
}

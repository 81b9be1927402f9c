use crate::mail::send::EmailSender;
#[cfg(all(not(test), not(feature = "local")))]
use crate::mail::send::SesSender;
use crate::mail::Email;
#[cfg(all(not(test), not(feature = "local")))]
use crate::mail::Message;
use actix_rt::Arbiter;
#[cfg(all(not(test), not(feature = "local")))]
use lazy_static::lazy_static;
use log::error;

#[cfg(all(not(test), not(feature = "local")))]
lazy_static! {
    static ref MAIL_MAN: MailMan<SesSender> = MailMan::default();
}

#[cfg(all(not(test), not(feature = "local")))]
pub fn send_email(to: &str, from: &str, message: Message) {
    MAIL_MAN.send(Email::with(to.to_owned(), from.to_owned(), message));
}

#[cfg(any(test, feature = "local"))]
pub fn send_email(_: &str, _: &str, _: crate::mail::Message) {}

pub struct MailMan<T: EmailSender> {
    pub arbiter: Arbiter,
    pub sender: T,
}

impl<T: EmailSender> Default for MailMan<T> {
    fn default() -> Self {
        MailMan {
            arbiter: Arbiter::default(),
            sender: T::default(),
        }
    }
}

impl<T: EmailSender> MailMan<T> {
    pub fn send(&self, e: Email) {
        let s = self.sender.clone();
        let f = Box::pin(async move {
            if let Err(e) = s.send_email(e).await {
                error!("Error sending email: {}", e);
            }
        });
        self.arbiter.send(f)
    }
}

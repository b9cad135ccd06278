mod carousel;
mod contact_message;
mod newsletter_signup;
mod prayer;
mod required_field;

// re-exports
pub use carousel::{Carousel, CarouselError, CarouselView};
pub use contact_message::ContactMessage;
pub use newsletter_signup::NewsletterSignup;
pub use prayer::{DailyPrayer, DailyTimes, JummahShift, PrayerDay, PrayerRow, PrayerTime};
pub use required_field::RequiredField;

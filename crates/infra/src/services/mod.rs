mod email;

pub use email::{Email, EmailRelayService, IEmailService, InMemoryEmailService};

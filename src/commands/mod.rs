pub mod interactive;
pub mod lookup;
pub mod misc;

pub use interactive::run_session;
pub use lookup::lookup_user;
pub use misc::{config_command, generate_completions};

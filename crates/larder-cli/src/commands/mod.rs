pub mod add;
pub mod lists;
pub mod rm;
pub mod status;
pub mod watch;

//! Handlers mapping a resolved directive list to response effects.
//!
//! Each handler reads the directive list (and, for some, the request URLs or
//! configuration) and returns an [`Effect`](crate::Effect). None of them
//! share state; [`Engine::respond_to`](crate::Engine::respond_to) folds
//! their output in a fixed order.

mod canonical;
mod delay;
mod heading;
mod random_url;
mod robots;
mod status;
mod title;
mod vary;

pub use canonical::canonical;
pub use delay::{delay, delay_plan};
pub use heading::h1;
pub use random_url::random_url;
pub use robots::index_follow;
pub use status::handle_redirect;
pub use title::title;
pub use vary::vary;

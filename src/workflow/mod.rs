pub mod compare_flow;
pub mod explore_flow;
pub mod session;

pub use compare_flow::{CompareFlow, CompareView};
pub use explore_flow::{DetailView, ExploreFlow, ListingView};
pub use session::SessionCtx;

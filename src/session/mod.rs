mod state;

pub use state::{DashboardState, DashboardView, FetchTicket};

pub mod admin;
pub mod admin_events;
pub mod admin_photos;
pub mod admin_states;
pub mod event_detail;
pub mod home;
pub mod login;
pub mod navigation;
pub mod state_detail;

pub use admin::AdminScreen;
pub use admin_events::EventPanel;
pub use admin_photos::PhotoPanel;
pub use admin_states::StatePanel;
pub use event_detail::EventDetailScreen;
pub use home::HomeScreen;
pub use login::LoginScreen;
pub use navigation::NavigationBar;
pub use state_detail::StateDetailScreen;

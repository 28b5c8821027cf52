mod emergency;
mod home;
mod onboarding;
mod order;
mod profile;

pub use emergency::EmergencyMode;
pub use home::HomeScreen;
pub use onboarding::OnboardingFlow;
pub use order::OrderFlow;
pub use profile::ProfileScreen;

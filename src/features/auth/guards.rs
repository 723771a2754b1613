/// Landing view chosen after a successful sign-in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    AdminHome,
    Dashboard,
}

impl Destination {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Destination::AdminHome => "/admin",
            Destination::Dashboard => "/dashboard",
        }
    }
}

/// Maps a user role to its landing view, independent of navigation side
/// effects. Comparison is case-sensitive: only the exact strings
/// "official" and "admin" reach the admin view, everything else lands on
/// the dashboard.
#[must_use]
pub fn destination_for(user_type: &str) -> Destination {
    match user_type {
        "official" | "admin" => Destination::AdminHome,
        _ => Destination::Dashboard,
    }
}
